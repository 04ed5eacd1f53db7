//! Board configuration.
//!
//! Hosts configure the board at startup by providing:
//! - `FormationTemplate`: the slots random allocation fills, in fill order
//! - `BoardConfig`: template plus allocation threshold, drop clamping,
//!   feedback duration and an optional RNG seed
//!
//! Configuration can be built in code with the `with_*` methods or loaded
//! from JSON with [`BoardConfig::from_json`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ConfigError;
use super::player::Position;

/// Names the board is seeded with at startup.
pub const DEFAULT_ROSTER: [&str; 29] = [
    "主席", "老板", "副主席", "John", "Jeffery", "步兵", "李老大", "Martin", "Nick", "Marco",
    "Hao", "JackyT", "博士", "小马", "小吕", "Kim", "Eddie", "六边形", "Alan", "Kai", "Patrick",
    "Biqi", "尹珂", "Biqi", "Rivers", "Frank", "Matthew", "郑有财", "Alex",
];

/// Tactical role of a formation slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// One position in a formation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormationSlot {
    pub role: FormationRole,
    pub position: Position,
}

impl FormationSlot {
    #[must_use]
    pub const fn new(role: FormationRole, x: f64, y: f64) -> Self {
        Self {
            role,
            position: Position::new(x, y),
        }
    }
}

/// Ordered formation slots, oriented toward the top of the board.
///
/// Slot order is fill order: goalkeeper first, then each line left to right.
/// The blue team takes coordinates verbatim; the red team mirrors `y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormationTemplate {
    pub name: String,
    pub slots: SmallVec<[FormationSlot; 11]>,
}

impl FormationTemplate {
    pub fn new(name: impl Into<String>, slots: &[FormationSlot]) -> Self {
        Self {
            name: name.into(),
            slots: SmallVec::from_slice(slots),
        }
    }

    /// The 4-4-2 used by random allocation.
    #[must_use]
    pub fn four_four_two() -> Self {
        use FormationRole::{Defender, Forward, Goalkeeper, Midfielder};

        Self::new(
            "4-4-2",
            &[
                FormationSlot::new(Goalkeeper, 50.0, 92.0),
                FormationSlot::new(Defender, 20.0, 80.0),
                FormationSlot::new(Defender, 40.0, 80.0),
                FormationSlot::new(Defender, 60.0, 80.0),
                FormationSlot::new(Defender, 80.0, 80.0),
                FormationSlot::new(Midfielder, 20.0, 60.0),
                FormationSlot::new(Midfielder, 40.0, 60.0),
                FormationSlot::new(Midfielder, 60.0, 60.0),
                FormationSlot::new(Midfielder, 80.0, 60.0),
                FormationSlot::new(Forward, 35.0, 40.0),
                FormationSlot::new(Forward, 65.0, 40.0),
            ],
        )
    }

    /// A 4-3-3 on the same coordinate scale.
    #[must_use]
    pub fn four_three_three() -> Self {
        use FormationRole::{Defender, Forward, Goalkeeper, Midfielder};

        Self::new(
            "4-3-3",
            &[
                FormationSlot::new(Goalkeeper, 50.0, 92.0),
                FormationSlot::new(Defender, 20.0, 80.0),
                FormationSlot::new(Defender, 40.0, 80.0),
                FormationSlot::new(Defender, 60.0, 80.0),
                FormationSlot::new(Defender, 80.0, 80.0),
                FormationSlot::new(Midfielder, 30.0, 60.0),
                FormationSlot::new(Midfielder, 50.0, 62.0),
                FormationSlot::new(Midfielder, 70.0, 60.0),
                FormationSlot::new(Forward, 25.0, 40.0),
                FormationSlot::new(Forward, 50.0, 38.0),
                FormationSlot::new(Forward, 75.0, 40.0),
            ],
        )
    }

    /// Players per team.
    #[must_use]
    pub fn team_size(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots with the given role.
    #[must_use]
    pub fn count(&self, role: FormationRole) -> usize {
        self.slots.iter().filter(|s| s.role == role).count()
    }

    /// Slot positions in fill order for the blue team.
    pub fn blue_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots.iter().map(|s| s.position)
    }

    /// Slot positions in fill order for the red team (mirrored).
    pub fn red_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots.iter().map(|s| s.position.mirrored())
    }

    /// Check the template is usable for allocation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots.is_empty() {
            return Err(ConfigError::EmptyFormation);
        }

        let keepers = self.count(FormationRole::Goalkeeper);
        if keepers != 1 {
            return Err(ConfigError::GoalkeeperCount(keepers));
        }

        for (index, slot) in self.slots.iter().enumerate() {
            if !slot.position.in_bounds() {
                return Err(ConfigError::SlotOutOfBounds {
                    index,
                    x: slot.position.x,
                    y: slot.position.y,
                });
            }
        }

        Ok(())
    }
}

impl Default for FormationTemplate {
    fn default() -> Self {
        Self::four_four_two()
    }
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Template random allocation fills, once per team.
    pub formation: FormationTemplate,

    /// Unassigned players required before random allocation runs.
    ///
    /// Defaults to 24 even though two 4-4-2 teams consume 22.
    pub min_unassigned: usize,

    /// Clamp dropped coordinates into `[0, 100]`.
    pub clamp_drops: bool,

    /// How long a feedback notice stays visible, in milliseconds.
    pub feedback_ms: u64,

    /// Seed for allocation shuffles. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            formation: FormationTemplate::four_four_two(),
            min_unassigned: 24,
            clamp_drops: false,
            feedback_ms: 2000,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Use a different formation template.
    #[must_use]
    pub fn with_formation(mut self, formation: FormationTemplate) -> Self {
        self.formation = formation;
        self
    }

    /// Set the random-allocation threshold.
    #[must_use]
    pub fn with_min_unassigned(mut self, min: usize) -> Self {
        self.min_unassigned = min;
        self
    }

    /// Enable or disable clamping of dropped coordinates.
    #[must_use]
    pub fn with_clamp_drops(mut self, clamp: bool) -> Self {
        self.clamp_drops = clamp;
        self
    }

    /// Set the feedback notice duration.
    #[must_use]
    pub fn with_feedback_ms(mut self, ms: u64) -> Self {
        self.feedback_ms = ms;
        self
    }

    /// Fix the allocation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Players consumed by one allocation (both teams).
    #[must_use]
    pub fn players_per_allocation(&self) -> usize {
        self.formation.team_size() * 2
    }

    /// Validate the template and the allocation threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.formation.validate()?;

        let required = self.players_per_allocation();
        if self.min_unassigned < required {
            return Err(ConfigError::ThresholdTooLow {
                min_unassigned: self.min_unassigned,
                required,
            });
        }

        Ok(())
    }
}
