// Motor domain model and the fixed registry of monitored assets
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorStatus {
    Normal,
    Warning,
    Critical,
}

impl fmt::Display for MotorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MotorStatus::Normal => "Normal",
            MotorStatus::Warning => "Warning",
            MotorStatus::Critical => "Critical",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorRecord {
    pub id: u32,
    pub name: String,
    pub health_score: u8,
    pub remaining_life: String,
    pub status: MotorStatus,
    pub vibration_status: String,
    pub electrical_status: String,
    pub color: String,
}

impl MotorRecord {
    pub fn health_label(&self) -> String {
        format!("{}%", self.health_score)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("motor {0} not found")]
    NotFound(u32),
    #[error("duplicate motor id {0}")]
    DuplicateId(u32),
    #[error("motor {id} has health score {score}, expected 0-100")]
    InvalidHealth { id: u32, score: u8 },
}

/// Read-only catalogue of motors, built once at start-up.
#[derive(Debug, Clone)]
pub struct MotorRegistry {
    motors: Vec<MotorRecord>,
}

impl MotorRegistry {
    pub fn new(motors: Vec<MotorRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for motor in &motors {
            if !seen.insert(motor.id) {
                return Err(RegistryError::DuplicateId(motor.id));
            }
            if motor.health_score > 100 {
                return Err(RegistryError::InvalidHealth {
                    id: motor.id,
                    score: motor.health_score,
                });
            }
        }
        Ok(Self { motors })
    }

    /// The plant's four monitored compressor and pump motors.
    pub fn builtin() -> Self {
        Self {
            motors: builtin_motors(),
        }
    }

    pub fn lookup(&self, id: u32) -> Result<&MotorRecord, RegistryError> {
        self.motors
            .iter()
            .find(|m| m.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn all(&self) -> &[MotorRecord] {
        &self.motors
    }

    pub fn motors_in_alarm(&self) -> usize {
        self.motors
            .iter()
            .filter(|m| m.status != MotorStatus::Normal)
            .count()
    }
}

impl Default for MotorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_motor(id: u32, name: &str, health_score: u8, remaining_life: &str, status: MotorStatus) -> MotorRecord {
    MotorRecord {
        id,
        name: name.to_string(),
        health_score,
        remaining_life: remaining_life.to_string(),
        status,
        vibration_status: "Normal".to_string(),
        electrical_status: "Normal".to_string(),
        color: "#22c55e".to_string(),
    }
}

pub fn builtin_motors() -> Vec<MotorRecord> {
    vec![
        builtin_motor(1, "203-COM-125A", 88, "45 days", MotorStatus::Normal),
        MotorRecord {
            electrical_status: "Critical".to_string(),
            color: "#f97316".to_string(),
            ..builtin_motor(2, "203-COM-125B", 52, "13 days", MotorStatus::Warning)
        },
        builtin_motor(3, "203-P-23A", 94, "10 days", MotorStatus::Normal),
        MotorRecord {
            vibration_status: "Bearing".to_string(),
            electrical_status: "80%".to_string(),
            ..builtin_motor(4, "203-P-23B", 74, "11 days", MotorStatus::Normal)
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ids() {
        let registry = MotorRegistry::builtin();
        for id in 1..=4 {
            let motor = registry.lookup(id).unwrap();
            assert_eq!(motor.id, id);
        }
    }

    #[test]
    fn test_lookup_unknown_ids() {
        let registry = MotorRegistry::builtin();
        assert_eq!(registry.lookup(0), Err(RegistryError::NotFound(0)));
        assert_eq!(registry.lookup(999), Err(RegistryError::NotFound(999)));
    }

    #[test]
    fn test_warning_motor() {
        let registry = MotorRegistry::builtin();
        let motor = registry.lookup(2).unwrap();
        assert_eq!(motor.name, "203-COM-125B");
        assert_eq!(motor.health_label(), "52%");
        assert_eq!(motor.status.to_string(), "Warning");
        assert_eq!(registry.motors_in_alarm(), 1);
        assert_eq!(motor.electrical_status, "Critical");
        assert_eq!(motor.color, "#f97316");
    }

    #[test]
    fn test_builtin_status_columns() {
        let registry = MotorRegistry::builtin();
        let motor = registry.lookup(4).unwrap();
        assert_eq!(motor.vibration_status, "Bearing");
        assert_eq!(motor.electrical_status, "80%");
        assert_eq!(motor.status, MotorStatus::Normal);

        let motor = registry.lookup(1).unwrap();
        assert_eq!(motor.remaining_life, "45 days");
        assert_eq!(motor.color, "#22c55e");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut motors = builtin_motors();
        motors.push(motors[0].clone());
        assert_eq!(
            MotorRegistry::new(motors).unwrap_err(),
            RegistryError::DuplicateId(1)
        );
    }

    #[test]
    fn test_rejects_health_above_100() {
        let mut motors = builtin_motors();
        motors[3].health_score = 120;
        assert_eq!(
            MotorRegistry::new(motors).unwrap_err(),
            RegistryError::InvalidHealth { id: 4, score: 120 }
        );
    }
}
