use jiff::SpanRelativeTo;

use crate::points::PointSource;

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

/// `cities`, `grid:<rows>x<cols>` or `random:<count>`.
pub fn parse_point_source(input: &str) -> Result<PointSource, String> {
    match input.split_once(':') {
        None if input == "cities" => Ok(PointSource::Cities),
        Some(("grid", size)) => {
            let (rows, cols) = size
                .split_once('x')
                .ok_or_else(|| String::from("Expected grid:<rows>x<cols>"))?;
            Ok(PointSource::Grid {
                rows: rows.parse().map_err(|_| String::from("Invalid grid rows"))?,
                cols: cols.parse().map_err(|_| String::from("Invalid grid columns"))?,
            })
        }
        Some(("random", count)) => Ok(PointSource::Random {
            count: count
                .parse()
                .map_err(|_| String::from("Invalid number of points"))?,
        }),
        _ => Err(String::from(
            "Invalid point source, expected cities, grid:<rows>x<cols> or random:<count>",
        )),
    }
}
