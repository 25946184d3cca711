//! Parsing of coordinate arguments given on the command line

use crate::extractor::{Coordinate, Region};

/// Parse a coordinate from a string (format: "x,y")
pub fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let parts = parse_integers(value, 2)
        .map_err(|e| format!("Coordinate '{}' {}", value, e))?;
    Ok(Coordinate::new(parts[0], parts[1]))
}

/// Parse a region from a string (format: "start_x,start_y,end_x,end_y")
pub fn parse_region(value: &str) -> Result<Region, String> {
    let parts = parse_integers(value, 4)
        .map_err(|e| format!("Region '{}' {}", value, e))?;
    Ok(Region::new(parts[0], parts[1], parts[2], parts[3]))
}

fn parse_integers(value: &str, expected: usize) -> Result<Vec<i64>, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != expected {
        return Err(format!("must have {} comma-separated values", expected));
    }

    parts.iter()
        .map(|p| p.trim().parse::<i64>().map_err(|_| format!("has invalid value '{}'", p.trim())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("3, -4").unwrap(), Coordinate::new(3, -4));
        assert!(parse_coordinate("3").is_err());
        assert!(parse_coordinate("a,b").is_err());
    }

    #[test]
    fn test_parse_region() {
        assert_eq!(parse_region("0,0,10,20").unwrap(), Region::new(0, 0, 10, 20));
        assert_eq!(parse_region("1,2,3").unwrap_err(), "Region '1,2,3' must have 4 comma-separated values");
    }
}
