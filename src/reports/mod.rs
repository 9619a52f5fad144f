use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use promousetuner::device::{FirmwareStatus, MouseInfo};
use promousetuner::profiles::GameProfile;
use promousetuner::recommend::{Impact, Recommendation, RecommendedSettings};
use promousetuner::scoring::CalibrationResult;
use promousetuner::settings::MouseSettings;

fn score_cell(value: u8) -> Cell {
    let color = if value >= 80 {
        Color::Green
    } else if value >= 50 {
        Color::Yellow
    } else {
        Color::Red
    };
    Cell::new(format!("{}%", value))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

pub fn print_calibration(results: &CalibrationResult) {
    println!("\n🎯 === CALIBRATION RESULTS === 🎯");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Dimension").add_attribute(Attribute::Bold),
        Cell::new("Score").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Accuracy"), score_cell(results.accuracy)]);
    table.add_row(vec![Cell::new("Speed"), score_cell(results.speed)]);
    table.add_row(vec![Cell::new("Tracking"), score_cell(results.tracking)]);
    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Bold),
        score_cell(results.overall),
    ]);
    println!("{table}");

    if !results.is_complete() {
        println!("(overall stays 0 until all three tests have been run)");
    }
}

pub fn print_bundle(bundle: &RecommendedSettings) {
    println!("\n⚙️  Recommended settings for your performance:");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec!["DPI".to_string(), bundle.dpi.to_string()]);
    table.add_row(vec!["Polling Rate".to_string(), format!("{} Hz", bundle.polling_rate)]);
    table.add_row(vec![
        "Acceleration".to_string(),
        if bundle.acceleration { "Enabled" } else { "Disabled" }.to_string(),
    ]);
    table.add_row(vec![
        "Lift-off Distance".to_string(),
        bundle.lift_off_distance.to_string(),
    ]);
    println!("{table}");
}

pub fn print_settings(settings: &MouseSettings) {
    println!("\n🖱️  === MOUSE SETTINGS === 🖱️");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    let on_off = |b: bool| if b { "on" } else { "off" }.to_string();
    table.add_row(vec!["DPI".to_string(), settings.dpi.to_string()]);
    table.add_row(vec!["Polling Rate".to_string(), format!("{} Hz", settings.polling_rate)]);
    table.add_row(vec!["Acceleration".to_string(), on_off(settings.acceleration)]);
    table.add_row(vec!["Smoothing".to_string(), on_off(settings.smoothing)]);
    table.add_row(vec![
        "Lift-off Distance".to_string(),
        settings.lift_off_distance.to_string(),
    ]);
    table.add_row(vec!["Angle Snapping".to_string(), settings.angle_snapping.to_string()]);
    table.add_row(vec![
        "Debounce Time".to_string(),
        format!("{} ms", settings.debounce_time),
    ]);
    table.add_row(vec!["Raw Input".to_string(), on_off(settings.raw_input)]);
    table.add_row(vec![
        "Surface Calibration".to_string(),
        on_off(settings.surface_calibration),
    ]);
    println!("{table}");
}

pub fn print_profiles(profiles: &[GameProfile]) {
    println!("\n🎮 === GAME PROFILES === 🎮");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "DPI", "Polling", "LOD", "Snapping", "Accel"]);
    for p in profiles {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.dpi.to_string(),
            format!("{} Hz", p.polling_rate),
            p.lift_off_distance.to_string(),
            if p.angle_snapping { "on" } else { "off" }.to_string(),
            if p.acceleration { "on" } else { "off" }.to_string(),
        ]);
    }
    println!("{table}");
}

pub fn print_recommendations(recs: &[Recommendation]) {
    if recs.is_empty() {
        println!("\n✅ No active recommendations.");
        return;
    }
    println!("\n💡 === RECOMMENDATIONS === 💡");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Impact", "Type", "Game", "Description"]);
    for r in recs {
        let impact = match r.impact {
            Impact::High => Cell::new("high").fg(Color::Red),
            Impact::Medium => Cell::new("medium").fg(Color::Yellow),
            Impact::Low => Cell::new("low").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(&r.id),
            Cell::new(&r.title),
            impact,
            Cell::new(r.kind.to_string()),
            Cell::new(r.game.as_deref().unwrap_or("-")),
            Cell::new(&r.description),
        ]);
    }
    println!("{table}");
}

pub fn print_device(info: &MouseInfo) {
    let status = if info.connected {
        "connected"
    } else {
        "not connected"
    };
    println!("\n🔌 {} — {}", info.name, status);
}

pub fn print_firmware(status: &FirmwareStatus) {
    if status.available {
        println!("\n⬆️  Firmware update available: {}", status.version);
    } else {
        println!("\n✅ Firmware is up to date ({})", status.version);
    }
}
