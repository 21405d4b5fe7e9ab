//! Plain-text rendering of schedules.
//!
//! A report is a title banner, a character Gantt timeline of the trace and
//! a bordered schedule table whose footer carries the three aggregates.

use std::io::{self, Write};

use crate::models::{ExecutionInterval, Schedule};

const HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Gantt cell width, pid included.
const CELL_WIDTH: usize = 8;

/// Writes the title between two dashed rules twice its length.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt timeline: one cell per interval, then the start of each
/// interval and the stop of the last one.
pub fn write_gantt<W: Write>(w: &mut W, trace: &[ExecutionInterval]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for interval in trace {
        let pid = interval.process_id.to_string();
        let padding = " ".repeat(CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;
    for interval in trace {
        write!(w, "{}\t", interval.start)?;
    }
    if let Some(last) = trace.last() {
        write!(w, "{}", last.stop)?;
    }
    write!(w, "\n\n")
}

/// Writes the schedule table with its aggregate footer.
pub fn write_table<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = schedule
        .rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();
    let header = HEADER.map(|h| h.to_uppercase());
    let footer = footer_cells(schedule);

    let mut widths = header.clone().map(|h| h.len());
    for row in body.iter().chain(std::iter::once(&footer)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = widths
        .iter()
        .fold(String::from("+"), |acc, width| acc + &"-".repeat(width + 2) + "+");

    writeln!(w, "{rule}")?;
    write_cells(w, &header, &widths)?;
    writeln!(w, "{rule}")?;
    for row in &body {
        write_cells(w, row, &widths)?;
    }
    writeln!(w, "{rule}")?;
    write_cells(w, &footer, &widths)?;
    writeln!(w, "{rule}")
}

/// Writes the full report for one schedule.
pub fn write_schedule<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    write_title(w, &schedule.title)?;
    write_gantt(w, &schedule.trace)?;
    write_table(w, schedule)
}

/// Renders the full report into a string.
pub fn render(schedule: &Schedule) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_schedule(&mut buf, schedule);
    String::from_utf8_lossy(&buf).into_owned()
}

fn footer_cells(schedule: &Schedule) -> [String; 7] {
    let mut footer: [String; 7] = Default::default();
    match &schedule.metrics {
        Some(m) => {
            footer[4] = format!("Average {:.2}", m.average_wait);
            footer[5] = format!("Average {:.2}", m.average_turnaround);
            footer[6] = format!("Throughput {:.2}/t", m.throughput);
        }
        None => footer[4] = "no data".to_string(),
    }
    footer
}

fn write_cells<W: Write>(w: &mut W, cells: &[String; 7], widths: &[usize; 7]) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(w, " {cell:>width$} |")?;
    }
    writeln!(w)
}
