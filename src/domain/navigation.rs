// Navigation model - addressable views and their selectable state
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid motor id: {0}")]
    InvalidMotorId(String),
    #[error("invalid range {0:?}, expected 24h, 7d or 30d")]
    InvalidRange(String),
    #[error("invalid axis {0:?}, expected X, Y or Z")]
    InvalidAxis(String),
    #[error("invalid hours {0:?}, expected a whole number")]
    InvalidHours(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Day,
    #[default]
    Week,
    Month,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Day, TimeRange::Week, TimeRange::Month];

    pub fn days(self) -> usize {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }

    pub fn hours(self) -> usize {
        self.days() * 24
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Day => f.write_str("24h"),
            TimeRange::Week => f.write_str("7d"),
            TimeRange::Month => f.write_str("30d"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" | "1d" => Ok(TimeRange::Day),
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            _ => Err(RouteError::InvalidRange(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
            Axis::Z => f.write_str("Z"),
        }
    }
}

impl FromStr for Axis {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            _ => Err(RouteError::InvalidAxis(s.to_string())),
        }
    }
}

/// One addressable view together with its selected parameters.
///
/// Changing a parameter produces a new route; rendering that route
/// regenerates every series from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    MotorDetail { id: u32 },
    VibrationFft { axis: Axis },
    FaultDiagnosis,
    FaultDiagnosisSecondary,
    TemperatureTrends { range: TimeRange },
    RmsKurtosis { range: TimeRange },
}

impl Route {
    /// Build a motor detail route from the raw `/motor/{id}` path segment.
    pub fn motor(segment: &str) -> Result<Route, RouteError> {
        segment
            .trim()
            .parse::<u32>()
            .map(|id| Route::MotorDetail { id })
            .map_err(|_| RouteError::InvalidMotorId(segment.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::MotorDetail { id } => format!("/motor/{}", id),
            Route::VibrationFft { axis } => format!("/vibration-fft?axis={}", axis),
            Route::FaultDiagnosis => "/fault-diagnosis".to_string(),
            Route::FaultDiagnosisSecondary => "/fault-diagnosis-secondary".to_string(),
            Route::TemperatureTrends { range } => format!("/temperature-trends?range={}", range),
            Route::RmsKurtosis { range } => format!("/rms-kurtosis?range={}", range),
        }
    }

    /// Every non-home view navigates back to the overview.
    pub fn back(&self) -> Option<Route> {
        match self {
            Route::Home => None,
            _ => Some(Route::Home),
        }
    }

    pub fn with_range(self, range: TimeRange) -> Route {
        match self {
            Route::TemperatureTrends { .. } => Route::TemperatureTrends { range },
            Route::RmsKurtosis { .. } => Route::RmsKurtosis { range },
            other => other,
        }
    }

    pub fn with_axis(self, axis: Axis) -> Route {
        match self {
            Route::VibrationFft { .. } => Route::VibrationFft { axis },
            other => other,
        }
    }

    /// Path of a ranged view whose window was overridden to `hours`.
    /// Views without a time range ignore the override.
    pub fn window_path(&self, hours: Option<usize>) -> String {
        match (self.range(), hours) {
            (Some(_), Some(hours)) => format!("{}&hours={}", self.path(), hours),
            _ => self.path(),
        }
    }

    pub fn range(&self) -> Option<TimeRange> {
        match self {
            Route::TemperatureTrends { range } | Route::RmsKurtosis { range } => Some(*range),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_parsing() {
        assert_eq!("24h".parse::<TimeRange>().unwrap(), TimeRange::Day);
        assert_eq!("1d".parse::<TimeRange>().unwrap(), TimeRange::Day);
        assert_eq!("7D".parse::<TimeRange>().unwrap(), TimeRange::Week);
        assert_eq!("30d".parse::<TimeRange>().unwrap(), TimeRange::Month);
        assert!(matches!(
            "12h".parse::<TimeRange>(),
            Err(RouteError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_range_hours() {
        let hours: Vec<usize> = TimeRange::ALL.iter().map(|r| r.hours()).collect();
        assert_eq!(hours, vec![24, 168, 720]);
    }

    #[test]
    fn test_motor_route() {
        assert_eq!(Route::motor("2").unwrap(), Route::MotorDetail { id: 2 });
        assert_eq!(
            Route::motor("abc").unwrap_err(),
            RouteError::InvalidMotorId("abc".to_string())
        );
        assert!(Route::motor("-1").is_err());
    }

    #[test]
    fn test_back_navigation() {
        assert_eq!(Route::Home.back(), None);
        let routes = [
            Route::MotorDetail { id: 1 },
            Route::VibrationFft { axis: Axis::X },
            Route::FaultDiagnosis,
            Route::FaultDiagnosisSecondary,
            Route::TemperatureTrends { range: TimeRange::Week },
            Route::RmsKurtosis { range: TimeRange::Day },
        ];
        for route in routes {
            assert_eq!(route.back(), Some(Route::Home));
        }
    }

    #[test]
    fn test_range_transition_is_a_new_route() {
        let week = Route::TemperatureTrends { range: TimeRange::Week };
        let month = week.with_range(TimeRange::Month);
        assert_eq!(week.range(), Some(TimeRange::Week));
        assert_eq!(month.range(), Some(TimeRange::Month));
        assert_eq!(month.path(), "/temperature-trends?range=30d");

        // Views without a range selector ignore the transition
        assert_eq!(Route::FaultDiagnosis.with_range(TimeRange::Day), Route::FaultDiagnosis);
    }

    #[test]
    fn test_window_path_records_override() {
        let route = Route::RmsKurtosis { range: TimeRange::Month };
        assert_eq!(route.window_path(Some(36)), "/rms-kurtosis?range=30d&hours=36");
        assert_eq!(route.window_path(None), "/rms-kurtosis?range=30d");
        assert_eq!(Route::FaultDiagnosis.window_path(Some(36)), "/fault-diagnosis");
    }

    #[test]
    fn test_axis_transition() {
        let route = Route::VibrationFft { axis: Axis::X }.with_axis(Axis::Z);
        assert_eq!(route.path(), "/vibration-fft?axis=Z");
        assert_eq!("y".parse::<Axis>().unwrap(), Axis::Y);
        assert!("W".parse::<Axis>().is_err());
    }
}
