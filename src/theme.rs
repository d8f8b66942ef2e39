//! Cosmetic theme catalog
//!
//! The engine reads only the active theme's player/glow colors; ownership and
//! purchasing live entirely with the host's profile layer.

use crate::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    /// Star price; the starter theme is free
    pub price: u32,
    pub player_color: Color,
    pub glow_color: Color,
    pub description: &'static str,
}

pub const THEMES: [Theme; 5] = [
    Theme {
        id: "classic",
        name: "Classic Neon",
        price: 0,
        player_color: 0xffffff,
        glow_color: 0xffffff,
        description: "The original digital frontier.",
    },
    Theme {
        id: "cyber",
        name: "Cyber Rogue",
        price: 50,
        player_color: 0xff0055,
        glow_color: 0xff0055,
        description: "Aggressive pink aesthetics.",
    },
    Theme {
        id: "emerald",
        name: "Emerald Flux",
        price: 150,
        player_color: 0x00ff88,
        glow_color: 0x00ff88,
        description: "Stable green matrix flow.",
    },
    Theme {
        id: "void",
        name: "Void Walker",
        price: 300,
        player_color: 0x8a2be2,
        glow_color: 0x8a2be2,
        description: "The deepest purple of the digital void.",
    },
    Theme {
        id: "gold",
        name: "Pure Gold",
        price: 500,
        player_color: 0xffd700,
        glow_color: 0xffd700,
        description: "Reserved for the elite sync-runners.",
    },
];

/// Look up a theme by id, falling back to the starter theme
pub fn theme_by_id(id: &str) -> &'static Theme {
    THEMES.iter().find(|t| t.id == id).unwrap_or(&THEMES[0])
}
