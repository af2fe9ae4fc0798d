//! Parser for episode video titles.
//!
//! Uploads have followed three naming conventions over the years, all ending
//! in the team that recorded the episode:
//! ```text
//! Game - Title - Team                (first videos)
//! Game - Title - Part - Team         (old videos)
//! Game: Title - Part - Team          (new videos)
//! ```
//!
//! No title carries a version marker, so the convention is recognized purely
//! from structure: how many ` - ` separators there are, and whether the
//! leading segment holds a `: `. Recognition never fails; anything that fits
//! no convention collapses to the whole string.

/// Separator between the segments of a title.
pub const SEPARATOR: &str = " - ";

/// Secondary separator between game and title in the newer convention.
pub const COLON: &str = ": ";

/// Structured fields extracted from a raw video title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Trailing segment after the last separator (the uploading team).
    pub team: String,
    /// Everything before the team segment.
    pub game_and_title_and_part: String,
    /// The game being played.
    pub game: String,
    /// The episode title.
    pub title: String,
    /// Part label such as `"Part 3"`, empty when the title carries none.
    pub part: String,
    /// Which naming convention the title was recognized as.
    pub layout: TitleLayout,
}

/// Naming convention of the part of a title that precedes the team.
///
/// Variants are listed in the order [`TitleLayout::classify`] tests them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleLayout {
    /// No separator at all. The whole string stands in for every field.
    Unseparated,
    /// One separator and exactly one colon before it: `Game: Title - Part`.
    ColonTitled,
    /// One separator and anything else before it: `Game - Title`.
    DashTitled,
    /// Three or more pieces when split on the separator: `Game - Title - Part`.
    DashTitledWithPart,
}

impl TitleLayout {
    /// Recognize the convention of a title with its team already removed.
    pub fn classify(game_and_title_and_part: &str) -> Self {
        let pieces = game_and_title_and_part.split(SEPARATOR).count();
        match (game_and_title_and_part.split_once(SEPARATOR), pieces) {
            (None, _) => Self::Unseparated,
            (Some((first_half, _)), 2) if first_half.split(COLON).count() == 2 => {
                Self::ColonTitled
            }
            (Some(_), 2) => Self::DashTitled,
            (Some(_), _) => Self::DashTitledWithPart,
        }
    }

    /// The game-and-title prefix, with any part label cut off.
    pub fn game_and_title(self, game_and_title_and_part: &str) -> &str {
        let s = game_and_title_and_part;
        match self {
            Self::Unseparated | Self::DashTitled => s,
            Self::ColonTitled => s.split_once(SEPARATOR).map_or(s, |(head, _)| head),
            Self::DashTitledWithPart => s.rsplit_once(SEPARATOR).map_or(s, |(head, _)| head),
        }
    }
}

/// How the game name is divided from the episode title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameDivider {
    /// `Game - Title`: split at the first separator.
    Dash,
    /// `Game: Title`: game ends at the last colon, title starts after the first.
    Colon,
    /// Neither token present; game and title are both the whole string.
    Undivided,
}

impl GameDivider {
    /// Pick the divider for a game-and-title string. Dashes win over colons.
    pub fn classify(game_and_title: &str) -> Self {
        if game_and_title.contains(SEPARATOR) {
            Self::Dash
        } else if game_and_title.contains(COLON) {
            Self::Colon
        } else {
            Self::Undivided
        }
    }

    /// Split into `(game, title)`.
    pub fn split(self, game_and_title: &str) -> (&str, &str) {
        let s = game_and_title;
        match self {
            Self::Dash => s.split_once(SEPARATOR).unwrap_or((s, s)),
            Self::Colon => {
                let game = s.rsplit_once(COLON).map_or(s, |(game, _)| game);
                let title = s.split_once(COLON).map_or(s, |(_, title)| title);
                (game, title)
            }
            Self::Undivided => (s, s),
        }
    }
}

/// The part label, or an empty string when the title carries none.
///
/// Decided by where the first and last separators sit, not by how many
/// pieces a split yields: `"A - - B"` has two overlapping separators and
/// still carries the part `"B"`.
pub fn parse_part(game_and_title_and_part: &str) -> &str {
    let s = game_and_title_and_part;
    match (s.find(SEPARATOR), s.rfind(SEPARATOR)) {
        (Some(first), Some(last)) if first != last => &s[last + SEPARATOR.len()..],
        // `Game: Title - Part` and `Game - Title: Subtitle` both carry a part.
        (Some(_), Some(last)) if s.contains(COLON) => &s[last + SEPARATOR.len()..],
        // A colon without any separator leaves nowhere to take a part from.
        _ => "",
    }
}

/// Parse a raw video title into team, game, title and part.
///
/// # Examples
///
/// ```
/// use grumps_core::title::{parse_title, TitleLayout};
///
/// let parsed = parse_title("Zelda's Adventure: Vile Blue Vile - PART 6 - Game Grumps");
/// assert_eq!(parsed.game, "Zelda's Adventure");
/// assert_eq!(parsed.title, "Vile Blue Vile");
/// assert_eq!(parsed.part, "PART 6");
/// assert_eq!(parsed.team, "Game Grumps");
/// assert_eq!(parsed.layout, TitleLayout::ColonTitled);
///
/// let parsed = parse_title("Funny mii thing");
/// assert_eq!(parsed.game, "Funny mii thing");
/// assert_eq!(parsed.part, "");
/// ```
pub fn parse_title(full_title: &str) -> ParsedTitle {
    let (game_and_title_and_part, team) = full_title
        .rsplit_once(SEPARATOR)
        .unwrap_or((full_title, full_title));

    let layout = TitleLayout::classify(game_and_title_and_part);
    let game_and_title = layout.game_and_title(game_and_title_and_part);
    let (game, title) = GameDivider::classify(game_and_title).split(game_and_title);

    ParsedTitle {
        team: team.to_string(),
        game_and_title_and_part: game_and_title_and_part.to_string(),
        game: game.to_string(),
        title: title.to_string(),
        part: parse_part(game_and_title_and_part).to_string(),
        layout,
    }
}

#[cfg(test)]
#[path = "tests/title_tests.rs"]
mod tests;
