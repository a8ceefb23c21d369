use std::path::Path;

use cave_sunlight::config::SimulationConfig;
use cave_sunlight::{compass_direction, try_analyze, SimulationError};

fn main() -> Result<(), SimulationError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::load(Path::new(&path))?,
        None => SimulationConfig::default(),
    };
    let params = config.to_params()?;
    let analysis = try_analyze(&params)?;
    let summary = analysis.summary();

    println!("=== Cave Sunlight Analysis ===");
    println!(
        "Location: {:.4}°, {:.4}° ({})",
        params.latitude, params.longitude, config.timezone
    );
    println!("Date: {}", config.date);
    println!(
        "Cave: facing {:.0}°, {:.1} m wide, {:.1} m deep",
        params.cave.orientation, params.cave.width, params.cave.depth
    );
    println!();
    println!("--- Reference Times ---");
    let fmt = |t: &Option<chrono::DateTime<chrono_tz::Tz>>| match t {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    };
    println!("Sunrise:    {}", fmt(&analysis.sunrise_time));
    println!("Solar noon: {}", fmt(&analysis.solar_noon));
    println!("Sunset:     {}", fmt(&analysis.sunset_time));
    println!();
    println!("--- Summary ---");
    match summary.daylight_hours {
        Some(h) => println!("Daylight hours: {:.2}h", h),
        None => println!("Daylight hours: n/a"),
    }
    println!("Avoiding samples: {}", summary.avoidance_samples);
    println!("Direct sun samples: {}", summary.direct_samples);
    if let Some(rate) = summary.avoidance_rate {
        println!("Avoidance rate: {:.0}%", rate * 100.0);
    }
    println!();
    println!("--- Solar Positions ---");
    println!("{:<6} {:>8} {:>9} {:>4}  Status", "Time", "Azimuth", "Elevation", "Dir");
    for point in analysis.path_points.iter().filter(|p| p.is_visible) {
        let dir = compass_direction(point.position.azimuth).map_or("-", |c| c.abbreviation());
        println!(
            "{:<6} {:>7.1}° {:>8.1}° {:>4}  {}",
            point.time.format("%H:%M"),
            point.position.azimuth,
            point.position.elevation,
            dir,
            if point.hits_cave { "Direct Sunlight" } else { "Sunlight Avoids" }
        );
    }
    println!();
    println!("--- Avoidance Periods ---");
    if analysis.avoidance_periods.is_empty() {
        println!("None: the cave takes direct sunlight whenever the sun is up.");
    }
    for period in &analysis.avoidance_periods {
        println!(
            "{} - {}  ({} minutes)",
            period.start.format("%H:%M"),
            period.end.format("%H:%M"),
            period.duration_minutes()
        );
    }

    Ok(())
}
