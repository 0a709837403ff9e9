use std::fmt;
use std::str::FromStr;

use crate::error::EventError;

/// A modifier key that can be held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Either shift key.
    Shift,
    /// Control (command on Mac).
    Control,
    /// Alt / option.
    Alt,
    /// Meta (windows / super key).
    Meta,
}

impl Modifier {
    /// Every modifier, in reporting order.
    pub const ALL: [Self; 4] = [Self::Shift, Self::Control, Self::Alt, Self::Meta];

    /// Canonical name as exposed to sketch code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shift => "Shift",
            Self::Control => "Control",
            Self::Alt => "Alt",
            Self::Meta => "Meta",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Modifier {
    type Err = EventError;

    /// Parse a backend modifier name. Accepts the canonical names in any
    /// case plus the common platform spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shift" => Ok(Self::Shift),
            "control" | "ctrl" => Ok(Self::Control),
            "alt" | "option" => Ok(Self::Alt),
            "meta" | "super" | "cmd" | "command" | "logo" => Ok(Self::Meta),
            _ => Err(EventError::UnknownModifier(s.to_owned())),
        }
    }
}

/// Parse a list of backend modifier names, dropping the ones that do not
/// name a known modifier.
pub fn parse_modifiers<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Vec<Modifier> {
    names
        .into_iter()
        .filter_map(|name| match name.parse() {
            Ok(modifier) => Some(modifier),
            Err(e) => {
                log::debug!("dropping modifier: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!("Shift".parse::<Modifier>().unwrap(), Modifier::Shift);
        assert_eq!("ctrl".parse::<Modifier>().unwrap(), Modifier::Control);
        assert_eq!("Option".parse::<Modifier>().unwrap(), Modifier::Alt);
        assert_eq!("Super".parse::<Modifier>().unwrap(), Modifier::Meta);
        assert!(matches!(
            "Hyper".parse::<Modifier>(),
            Err(EventError::UnknownModifier(name)) if name == "Hyper"
        ));
    }

    #[test]
    fn name_round_trips() {
        for modifier in Modifier::ALL {
            assert_eq!(modifier.name().parse::<Modifier>().unwrap(), modifier);
        }
    }

    #[test]
    fn parse_list_drops_unknown() {
        let parsed = parse_modifiers(["Control", "Fn", "Shift"]);
        assert_eq!(parsed, vec![Modifier::Control, Modifier::Shift]);
    }
}
