use std::env;

use crate::error::ConfigError;
use crate::logic::grid::Grid;
use crate::models::Point;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_GRID_SIZE: i32 = 5;
pub const DEFAULT_OBSTACLES: &str = "2,2";

/// Startup settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub grid_width: i32,
    pub grid_height: i32,
    pub obstacles: Vec<Point>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            obstacles: vec![Point::new(2, 2)],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("PROBE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let grid_width = parse_dimension("PROBE_GRID_WIDTH", lookup("PROBE_GRID_WIDTH"))?;
        let grid_height = parse_dimension("PROBE_GRID_HEIGHT", lookup("PROBE_GRID_HEIGHT"))?;
        let obstacles = parse_obstacles(
            &lookup("PROBE_GRID_OBSTACLES").unwrap_or_else(|| DEFAULT_OBSTACLES.into()),
        )?;
        Ok(Self {
            bind_addr,
            grid_width,
            grid_height,
            obstacles,
        })
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height).with_obstacles(self.obstacles.iter().copied())
    }
}

fn parse_dimension(name: &'static str, raw: Option<String>) -> Result<i32, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_GRID_SIZE);
    };
    let value: i32 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.clone(),
    })?;
    if value <= 0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(value)
}

/// Parses `"x,y;x,y"`. Blank entries are skipped.
fn parse_obstacles(raw: &str) -> Result<Vec<Point>, ConfigError> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (x, y) = entry
                .split_once(',')
                .ok_or_else(|| ConfigError::InvalidObstacle(entry.into()))?;
            match (x.trim().parse(), y.trim().parse()) {
                (Ok(x), Ok(y)) => Ok(Point::new(x, y)),
                _ => Err(ConfigError::InvalidObstacle(entry.into())),
            }
        })
        .collect()
}
