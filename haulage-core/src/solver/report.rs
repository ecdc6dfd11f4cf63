#[cfg(test)]
#[path = "../../tests/unit/solver/report_test.rs"]
mod report_test;

use crate::models::Solution;
use crate::utils::GenericResult;
use std::fmt::Write as FmtWrite;
use std::io::{BufWriter, Write};

const REPORT_HEADER: &str = "Distributed Cargos and Optimal Routes:";

/// Renders solution as a text report: a header followed by one block per truck in processing order.
pub fn format_report(solution: &Solution) -> String {
    let mut report = String::new();

    // NOTE writing into String cannot fail
    let _ = writeln!(report, "{REPORT_HEADER}");

    solution.assignments.iter().for_each(|assignment| {
        let cargos = assignment.cargos.iter().map(|cargo| cargo.name.as_str()).collect::<Vec<_>>().join(", ");
        let route = assignment.route.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(" -> ");

        let _ = writeln!(report, "Truck {}:", assignment.truck);
        let _ = writeln!(report, "  Cargos: {cargos}");
        let _ = writeln!(report, "  Route: {route}");
    });

    report
}

/// Writes text report of the solution into the writer.
pub fn write_report<W: Write>(solution: &Solution, mut writer: BufWriter<W>) -> GenericResult<()> {
    writer.write_all(format_report(solution).as_bytes())?;
    writer.flush()?;

    Ok(())
}
