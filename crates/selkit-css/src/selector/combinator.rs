//! Combinators joining two compound selectors.

use std::fmt;

use strum_macros::EnumString;

/// The four CSS combinators.
///
/// [`SelectorBuilder::combine`](super::SelectorBuilder::combine) accepts any
/// string token; this enum names the ones CSS defines. Parsing accepts either
/// the token or its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
pub enum Combinator {
    /// `A B`: B is a descendant of A
    #[strum(serialize = " ", serialize = "descendant")]
    Descendant,
    /// `A > B`: B is a direct child of A
    #[strum(serialize = ">", serialize = "child")]
    Child,
    /// `A + B`: B immediately follows A
    #[strum(serialize = "+", serialize = "next-sibling")]
    NextSibling,
    /// `A ~ B`: B follows A
    #[strum(serialize = "~", serialize = "subsequent-sibling")]
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Recognize a literal combinator token (names are not accepted).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_and_name() {
        assert_eq!(">".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!("child".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!(" ".parse::<Combinator>(), Ok(Combinator::Descendant));
        assert_eq!(
            "subsequent-sibling".parse::<Combinator>(),
            Ok(Combinator::SubsequentSibling)
        );
        assert!("|".parse::<Combinator>().is_err());
    }

    #[test]
    fn test_from_token_rejects_names() {
        assert_eq!(Combinator::from_token("+"), Some(Combinator::NextSibling));
        assert_eq!(Combinator::from_token("next-sibling"), None);
    }
}
