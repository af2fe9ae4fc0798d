use super::*;

#[test]
fn classify_without_separator() {
    assert_eq!(TitleLayout::classify("Funny mii thing"), TitleLayout::Unseparated);
    assert_eq!(TitleLayout::classify("Joe & Mac: Finale"), TitleLayout::Unseparated);
}

#[test]
fn classify_colon_before_single_separator() {
    assert_eq!(
        TitleLayout::classify("Zelda's Adventure: Vile Blue Vile - PART 6"),
        TitleLayout::ColonTitled,
    );
}

#[test]
fn classify_single_separator_without_colon() {
    assert_eq!(
        TitleLayout::classify("Kirby Super Star - Spring Breeze ADVENTURES!"),
        TitleLayout::DashTitled,
    );
    // Colon after the separator does not count toward the new convention
    assert_eq!(
        TitleLayout::classify("Sonic - Title: Subtitle"),
        TitleLayout::DashTitled,
    );
}

#[test]
fn classify_two_colons_before_separator_is_dash_titled() {
    assert_eq!(
        TitleLayout::classify("Link: The Faces of Evil: My Name is Jesus - Part 1"),
        TitleLayout::DashTitled,
    );
}

#[test]
fn classify_many_separators() {
    assert_eq!(
        TitleLayout::classify("Mega Man 7 - This Game Rocks... Man - Part 1"),
        TitleLayout::DashTitledWithPart,
    );
    assert_eq!(
        TitleLayout::classify("A - B - C - D"),
        TitleLayout::DashTitledWithPart,
    );
}

#[test]
fn game_and_title_per_layout() {
    let s = "Zelda's Adventure: Vile Blue Vile - PART 6";
    assert_eq!(
        TitleLayout::ColonTitled.game_and_title(s),
        "Zelda's Adventure: Vile Blue Vile",
    );

    let s = "Kirby Super Star - Spring Breeze ADVENTURES!";
    assert_eq!(TitleLayout::DashTitled.game_and_title(s), s);

    let s = "Mega Man 7 - This Game Rocks... Man - Part 1";
    assert_eq!(
        TitleLayout::DashTitledWithPart.game_and_title(s),
        "Mega Man 7 - This Game Rocks... Man",
    );

    assert_eq!(TitleLayout::Unseparated.game_and_title("Solo"), "Solo");
}

#[test]
fn part_from_separator_positions() {
    assert_eq!(parse_part("Joe & Mac: Finale"), "");
    assert_eq!(parse_part("Game: Title - Part 2"), "Part 2");
    assert_eq!(parse_part("Game - Title"), "");
    assert_eq!(parse_part("Game - Title: More"), "Title: More");
    assert_eq!(parse_part("A - B - C - D"), "D");
}

#[test]
fn overlapping_separators_still_carry_a_part() {
    // Split sees two pieces, but the first and last separators differ
    assert_eq!(TitleLayout::classify("A - - B"), TitleLayout::DashTitled);
    assert_eq!(parse_part("A - - B"), "B");

    let p = parse_title("A - - B - Team");
    assert_eq!(p.team, "Team");
    assert_eq!(p.game, "A");
    assert_eq!(p.title, "- B");
    assert_eq!(p.part, "B");
}

#[test]
fn game_divider_prefers_dash() {
    assert_eq!(GameDivider::classify("Game: Sub - Title"), GameDivider::Dash);
    assert_eq!(GameDivider::Dash.split("Game: Sub - Title"), ("Game: Sub", "Title"));
}

#[test]
fn game_divider_colon_uses_last_for_game_and_first_for_title() {
    let s = "Link: The Faces of Evil: My Name is Jesus";
    assert_eq!(GameDivider::classify(s), GameDivider::Colon);
    assert_eq!(
        GameDivider::Colon.split(s),
        ("Link: The Faces of Evil", "The Faces of Evil: My Name is Jesus"),
    );
}

#[test]
fn game_divider_undivided() {
    assert_eq!(GameDivider::classify("Plain"), GameDivider::Undivided);
    assert_eq!(GameDivider::Undivided.split("Plain"), ("Plain", "Plain"));
}

#[test]
fn colon_without_space_is_not_a_delimiter() {
    let parsed = parse_title("Ratio 16:9 - Game Grumps");
    assert_eq!(parsed.layout, TitleLayout::Unseparated);
    assert_eq!(parsed.game, "Ratio 16:9");
    assert_eq!(parsed.title, "Ratio 16:9");
}
