use aoe4data::{Age, UnitAttribute, UnitRepository};
use aoe4heatmap::{BonusScale, HeatmapMatrix, SelectionController};
use anyhow::Result;
use std::fmt::Write;

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

pub fn render_civs(ctl: &SelectionController) -> Result<String> {
    let mut out = String::new();
    for code in ctl.cache().civs() {
        writeln!(out, "{:<4} {}", code, ctl.civ_title(code))?;
    }
    Ok(out)
}

/// Text grid of a heatmap view: attackers down, defenders across.
pub fn render_heatmap(
    view: &HeatmapMatrix,
    ctl: &SelectionController,
    scale: &BonusScale,
    shade: bool,
) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Attacker - {} / Defender - {} (max bonus {})",
        ctl.civ_title(&view.attacker_civ),
        ctl.civ_title(&view.defender_civ),
        scale.max_bonus()
    )?;

    if view.attacker_names.is_empty() || view.defender_names.is_empty() {
        writeln!(out, "(no units to show)")?;
        return Ok(out);
    }

    let label_width = view
        .attacker_names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0);

    write!(out, "{:label_width$}", "")?;
    for defender in &view.defender_names {
        write!(out, " | {}", defender)?;
    }
    writeln!(out)?;

    for attacker in &view.attacker_names {
        write!(out, "{:label_width$}", attacker)?;
        for (cell, defender) in view.row(attacker).iter().zip(&view.defender_names) {
            let width = defender.chars().count();
            if shade {
                let shade_char = shade_for(scale.intensity(cell.value));
                let block: String = std::iter::repeat_n(shade_char, width).collect();
                write!(out, " | {}", block)?;
            } else {
                write!(out, " | {:>width$}", cell.value)?;
            }
        }
        writeln!(out)?;
    }
    Ok(out)
}

fn shade_for(intensity: f64) -> char {
    let idx = (intensity * (SHADES.len() - 1) as f64).round() as usize;
    SHADES[idx.min(SHADES.len() - 1)]
}

/// Unit table of one civilization, every age variant in dataset order.
pub fn render_units(repo: &UnitRepository, civ: &str) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{:<28} {:<4} {:<28} {:>8} {:>6} {:>6} {:>6} {:<8} {:>6}",
        "Name", "Age", "Class", "HP", "Cost", "Sight", "Speed", "Weapon", "Damage"
    )?;

    let mut count = 0;
    for unit in repo.units_of_civ(civ) {
        count += 1;
        writeln!(
            out,
            "{:<28} {:<4} {:<28} {:>8} {:>6} {:>6} {:>6} {:<8} {:>6}",
            unit.name,
            Age(unit.age).to_string(),
            unit.display_classes.first().map(String::as_str).unwrap_or(""),
            UnitAttribute::Hitpoints.value(unit),
            unit.costs.resource_total(),
            UnitAttribute::LineOfSight.value(unit),
            UnitAttribute::Speed.value(unit),
            unit.primary_weapon().map(|w| w.kind.as_str()).unwrap_or(""),
            UnitAttribute::WeaponDamage.value(unit),
        )?;
    }

    if count == 0 {
        log::warn!("No units found for civilization {}", civ);
    }
    Ok(out)
}
