//! Character attributes.
//!
//! A [`StatBlock`] holds the eight attributes every battle check reads. The
//! persisted values live on the character build; the engine works on a copy
//! with item modifiers folded in.
mod block;

pub use block::StatBlock;

/// The eight attributes that define a character.
///
/// - **STR** (Strength) / **MAG** (Magic): attack value is the larger of the two
/// - **AGI** (Agility) / **STA** (Stamina): defense value is the larger of the two
/// - **STA** also sets max HP
/// - **WIT**, **WIL**, **CHA** feed the signature ability checks
/// - **LUK** (Luck) is carried for display only
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Attribute {
    Strength,
    Agility,
    Stamina,
    Magic,
    Wit,
    Will,
    Charisma,
    Luck,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Stamina,
        Attribute::Magic,
        Attribute::Wit,
        Attribute::Will,
        Attribute::Charisma,
        Attribute::Luck,
    ];

    /// Three-letter abbreviation used in roster listings.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Agility => "AGI",
            Attribute::Stamina => "STA",
            Attribute::Magic => "MAG",
            Attribute::Wit => "WIT",
            Attribute::Will => "WIL",
            Attribute::Charisma => "CHA",
            Attribute::Luck => "LUK",
        }
    }
}
