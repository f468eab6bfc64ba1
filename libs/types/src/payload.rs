//! Extractor strategies over raw replay payloads
//!
//! The capture script posts whatever page state it managed to grab, so the
//! same logical field shows up in several places depending on game version
//! and capture path. Each lookup is therefore an ordered list of named
//! strategies tried in priority order; the first hit wins and a miss at any
//! depth just yields `None`.
//!
//! Strategy order is part of the contract — e.g. an explicit
//! `competitiveGameMode` always beats the `isRated` boolean.

use serde_json::Value;

// ── Game object ─────────────────────────────────────────────────────

/// A strategy for locating the game object inside a payload.
pub type GameStrategy = for<'a> fn(&'a Value) -> Option<&'a Value>;

/// Ordered strategies for resolving the game object: a direct `game` field,
/// a `pageProps` wrapper, or the payload being the game object itself.
pub const GAME_STRATEGIES: &[(&str, GameStrategy)] = &[
    ("game-field", game_field),
    ("page-props-game", page_props_game),
    ("payload-as-game", payload_as_game),
];

/// `payload.game`, when it is an object.
pub fn game_field(payload: &Value) -> Option<&Value> {
    payload.get("game").filter(|v| v.is_object())
}

/// `payload.pageProps.game`, when it is an object.
pub fn page_props_game(payload: &Value) -> Option<&Value> {
    payload
        .get("pageProps")
        .and_then(|p| p.get("game"))
        .filter(|v| v.is_object())
}

/// The payload itself, when it is an object (bare captures post the game
/// object with no wrapper at all).
pub fn payload_as_game(payload: &Value) -> Option<&Value> {
    payload.is_object().then_some(payload)
}

/// Resolve the game object for a payload, or `None` when the payload is not
/// an object in any recognized shape.
pub fn game_object(payload: &Value) -> Option<&Value> {
    GAME_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(payload))
}

/// The game identifier of a payload, used only for best-effort dedup.
pub fn game_id(payload: &Value) -> Option<&str> {
    game_object(payload)?.get("gameId")?.as_str()
}

// ── Mode label ──────────────────────────────────────────────────────

/// A strategy for classifying the game mode of a resolved game object.
pub type ModeStrategy = for<'a> fn(&'a Value) -> Option<&'a str>;

/// Ordered mode classification strategies. The final `"unknown"` fallback
/// lives in [`mode_label`], not here.
pub const MODE_STRATEGIES: &[(&str, ModeStrategy)] = &[
    ("competitive-game-mode", competitive_game_mode),
    ("mode-field", mode_field),
    ("is-rated-flag", is_rated_flag),
];

/// Explicit `competitiveGameMode` string, when non-empty.
pub fn competitive_game_mode(game: &Value) -> Option<&str> {
    game.get("competitiveGameMode")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

/// Plain `mode` string, when non-empty.
pub fn mode_field(game: &Value) -> Option<&str> {
    game.get("mode")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

/// Boolean `isRated` mapped to `"rated"` / `"casual"`.
pub fn is_rated_flag(game: &Value) -> Option<&str> {
    game.get("isRated")
        .and_then(Value::as_bool)
        .map(|rated| if rated { "rated" } else { "casual" })
}

/// Classify the mode of a game object, falling back to `"unknown"` when no
/// indicator is present.
pub fn mode_label(game: &Value) -> &str {
    MODE_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(game))
        .unwrap_or("unknown")
}

// ── Players ─────────────────────────────────────────────────────────

/// A strategy for naming a player object.
pub type NameStrategy = fn(&Value) -> Option<String>;

/// Ordered player-identifier strategies. Anonymous players fall back to
/// `"unknown"` in [`player_name`] and share one series downstream.
pub const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("nick-field", nick_field),
    ("player-id-field", player_id_field),
];

/// The display `nick`, when non-empty.
pub fn nick_field(player: &Value) -> Option<String> {
    player
        .get("nick")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
}

/// The stable `playerId`; some client versions send it as a number.
pub fn player_id_field(player: &Value) -> Option<String> {
    match player.get("playerId")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// The identifier a player's rating series is keyed by.
pub fn player_name(player: &Value) -> String {
    NAME_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(player))
        .unwrap_or_else(|| "unknown".to_owned())
}

/// A strategy for resolving a player's rating.
pub type RatingStrategy = fn(&Value) -> Option<f64>;

/// Ordered rating strategies: a direct `rating` number, then the rating
/// nested under the `competitive` block.
pub const RATING_STRATEGIES: &[(&str, RatingStrategy)] = &[
    ("rating-field", rating_field),
    ("competitive-rating", competitive_rating),
];

/// Direct `rating` number on the player.
pub fn rating_field(player: &Value) -> Option<f64> {
    player.get("rating").and_then(Value::as_f64)
}

/// `competitive.rating` number on the player.
pub fn competitive_rating(player: &Value) -> Option<f64> {
    player.get("competitive")?.get("rating")?.as_f64()
}

/// Resolve a player's rating, if any strategy finds one.
pub fn player_rating(player: &Value) -> Option<f64> {
    RATING_STRATEGIES
        .iter()
        .find_map(|(_, strategy)| strategy(player))
}

// ── Rounds ──────────────────────────────────────────────────────────

/// The rounds of a game object; empty when absent or mistyped.
pub fn rounds(game: &Value) -> &[Value] {
    game.get("rounds")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The teams of a game object; empty when absent or mistyped.
pub fn teams(game: &Value) -> &[Value] {
    game.get("teams")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The players of a team object; empty when absent or mistyped.
pub fn players(team: &Value) -> &[Value] {
    team.get("players")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The round's panorama country code, as sent (case is normalized by the
/// aggregation side).
pub fn round_country(round: &Value) -> Option<&str> {
    round.get("panorama")?.get("countryCode")?.as_str()
}

/// The round's panorama coordinates; both latitude and longitude must be
/// present.
pub fn round_coords(round: &Value) -> Option<(f64, f64)> {
    let panorama = round.get("panorama")?;
    let lat = panorama.get("lat")?.as_f64()?;
    let lng = panorama.get("lng")?.as_f64()?;
    Some((lat, lng))
}

// ── Tests ───────────────────────────────────────────────────────────
