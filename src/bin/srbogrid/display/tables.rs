use std::io::{self, Write};

use srbo_grid::{Grid, GridModel, Molecule, Summary};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

/// One boxed key/value table per summary section, on stderr.
pub fn print_summary_tables(name: &str, summary: &Summary) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    for section in &summary.sections {
        let title = match section.title {
            "System info" => format!("System: {name}"),
            other => other.to_string(),
        };
        let rows: Vec<(&str, String)> = section
            .rows
            .iter()
            .map(|row| (row.label, row.value.to_string().trim().to_string()))
            .collect();
        print_kv_table(&mut out, &title, &rows);
    }
}

/// Grid points with their bond order and energy, on stderr.
pub fn print_grid_points(model: &GridModel, grid: &Grid) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let idx_w = 4usize;
    let side_w = 5usize;
    let num_w = 12usize;
    let sep_overhead = 13;
    let e_w = SAFE_TABLE_WIDTH.saturating_sub(idx_w + side_w + 2 * num_w + sep_overhead);

    let line = |l: &str, m: &str, r: &str| {
        format!(
            "{INDENT}{l}{}{m}{}{m}{}{m}{}{m}{}{r}",
            "─".repeat(idx_w + 2),
            "─".repeat(side_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(e_w + 2),
        )
    };

    let _ = writeln!(out, "{}┌─ Grid Points ─┐", INDENT);
    let _ = writeln!(out, "{}", line("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:>idx_w$} │ {:<side_w$} │ {:>num_w$} │ {:>num_w$} │ {:>e_w$} │",
        INDENT, "#", "Side", "r", "Bond order", "V(r)"
    );
    let _ = writeln!(out, "{}", line("├", "┼", "┤"));

    let morse = model.morse();
    for (i, &r) in grid.points().iter().enumerate() {
        let side = match i.cmp(&grid.nrep()) {
            std::cmp::Ordering::Less => "rep",
            std::cmp::Ordering::Equal => "eq",
            std::cmp::Ordering::Greater => "att",
        };
        let _ = writeln!(
            out,
            "{}│ {:>idx_w$} │ {:<side_w$} │ {:>num_w$.6} │ {:>num_w$.6} │ {:>e_w$} │",
            INDENT,
            i,
            side,
            r,
            model.to_bond_order(r),
            truncate(&format!("{:.4e}", morse.energy(r)), e_w),
        );
    }

    let _ = writeln!(out, "{}", line("└", "┴", "┘"));
}

/// Preset table for the `presets` command.
pub fn print_presets(out: &mut impl Write, presets: &[Molecule]) -> io::Result<()> {
    let name_w = 6usize;
    let num_w = 8usize;
    let desc_w = 28usize;

    let line = |l: &str, m: &str, r: &str| {
        format!(
            "{l}{}{m}{}{m}{}{m}{}{m}{}{r}",
            "─".repeat(name_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(desc_w + 2),
        )
    };

    writeln!(out, "{}", line("┌", "┬", "┐"))?;
    writeln!(
        out,
        "│ {:<name_w$} │ {:>num_w$} │ {:>num_w$} │ {:>num_w$} │ {:<desc_w$} │",
        "Name", "Re", "De", "ke", "Description"
    )?;
    writeln!(out, "{}", line("├", "┼", "┤"))?;

    for molecule in presets {
        writeln!(
            out,
            "│ {:<name_w$} │ {:>num_w$.4} │ {:>num_w$.4} │ {:>num_w$.4} │ {:<desc_w$} │",
            truncate(molecule.label(), name_w),
            molecule.re,
            molecule.de,
            molecule.ke,
            truncate(molecule.description.as_deref().unwrap_or(""), desc_w),
        )?;
    }

    writeln!(out, "{}", line("└", "┴", "┘"))?;
    writeln!(out, "Units: bohr, hartree, hartree/bohr²")?;
    Ok(())
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
