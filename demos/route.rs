use std::env;
use turnpoint_geo::{GeoPoint, Route, Turnpoint, distance, outline};

/// Prints the optimized line through a task given as `name:lat:lon:radius`
/// arguments, e.g. `Pilatus:46.978308:8.254787:1000`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        return Err("Usage: route <name:lat:lon:radius> <name:lat:lon:radius> ...".into());
    }

    let turnpoints = args
        .iter()
        .map(String::as_str)
        .map(parse_turnpoint)
        .collect::<Result<Vec<_>, _>>()?;

    let route = Route::new("task", turnpoints)?;
    let points = route.optimized_points();

    println!("=== Optimized Route ===");
    for (tp, point) in route.turnpoints().iter().zip(&points) {
        println!(
            "{:<16} {:>10.6} {:>11.6}  (center {:.6} {:.6}, radius {} m)",
            tp.name,
            point.latitude,
            point.longitude,
            tp.point.latitude,
            tp.point.longitude,
            tp.radius
        );
    }

    println!("\n=== Legs ===");
    for (i, leg) in points.windows(2).enumerate() {
        println!("{}. {:.1} km", i + 1, distance(leg[0], leg[1]) / 1000.0);
    }
    println!("Total: {:.1} km", route.optimized_distance() / 1000.0);

    if let [.., previous, goal] = route.turnpoints() {
        let [right, left] = outline::goal_line(previous.point, goal.point, goal.radius);
        println!("\n=== Goal Line ===");
        println!(
            "{:.6} {:.6} -> {:.6} {:.6}",
            right.latitude, right.longitude, left.latitude, left.longitude
        );
    }

    Ok(())
}

fn parse_turnpoint(arg: &str) -> Result<Turnpoint, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = arg.split(':').collect();
    let [name, lat, lon, radius] = parts.as_slice() else {
        return Err(format!("invalid turnpoint: {arg}").into());
    };

    let point = GeoPoint::try_new(lat.parse()?, lon.parse()?)?;
    Ok(Turnpoint::new(*name, point, radius.parse()?)?)
}
