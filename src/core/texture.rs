//! Texture handles and the pool pieces draw their coloring from
//!
//! A texture is an opaque, comparable content tag; renderers map it to an
//! [`Rgb`] when drawing. The pool is owned by the board, so two sessions
//! never share coloring state.

use crate::error::EngineError;
use crate::types::Rgb;

/// Named color contents available to pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureContent {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    DarkBlue,
    DarkGreen,
    Black,
    White,
}

impl TextureContent {
    /// All contents, vivid piece colors first
    pub const ALL: [TextureContent; 10] = [
        TextureContent::Red,
        TextureContent::Blue,
        TextureContent::Green,
        TextureContent::Yellow,
        TextureContent::Orange,
        TextureContent::Purple,
        TextureContent::DarkGreen,
        TextureContent::DarkBlue,
        TextureContent::Black,
        TextureContent::White,
    ];

    /// Parse a content from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TextureContent::Red),
            "blue" => Some(TextureContent::Blue),
            "green" => Some(TextureContent::Green),
            "yellow" => Some(TextureContent::Yellow),
            "orange" => Some(TextureContent::Orange),
            "purple" => Some(TextureContent::Purple),
            "dark_blue" => Some(TextureContent::DarkBlue),
            "dark_green" => Some(TextureContent::DarkGreen),
            "black" => Some(TextureContent::Black),
            "white" => Some(TextureContent::White),
            _ => None,
        }
    }

    /// Lowercase name of this content
    pub fn as_str(&self) -> &'static str {
        match self {
            TextureContent::Red => "red",
            TextureContent::Blue => "blue",
            TextureContent::Green => "green",
            TextureContent::Yellow => "yellow",
            TextureContent::Orange => "orange",
            TextureContent::Purple => "purple",
            TextureContent::DarkBlue => "dark_blue",
            TextureContent::DarkGreen => "dark_green",
            TextureContent::Black => "black",
            TextureContent::White => "white",
        }
    }

    /// Renderer color for this content
    pub fn rgb(&self) -> Rgb {
        match self {
            TextureContent::Red => Rgb::new(255, 0, 0),
            TextureContent::Blue => Rgb::new(0, 0, 255),
            TextureContent::Green => Rgb::new(0, 255, 0),
            TextureContent::Yellow => Rgb::new(255, 255, 0),
            TextureContent::Orange => Rgb::new(255, 165, 0),
            TextureContent::Purple => Rgb::new(128, 0, 128),
            // board background shades
            TextureContent::DarkBlue => Rgb::new(20, 20, 40),
            TextureContent::Black => Rgb::new(20, 20, 40),
            TextureContent::DarkGreen => Rgb::new(0, 128, 0),
            TextureContent::White => Rgb::new(255, 255, 255),
        }
    }
}

/// Opaque comparable handle stored in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture {
    content: TextureContent,
}

impl Texture {
    pub const fn new(content: TextureContent) -> Self {
        Self { content }
    }

    pub fn content(&self) -> TextureContent {
        self.content
    }

    /// Renderer color for this texture
    pub fn rgb(&self) -> Rgb {
        self.content.rgb()
    }
}

/// Distinct texture contents available for random piece coloring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturePool {
    contents: Vec<TextureContent>,
}

impl TexturePool {
    /// Build a pool from the given contents, dropping duplicates
    ///
    /// An empty pool cannot color pieces and is rejected.
    pub fn new(contents: impl IntoIterator<Item = TextureContent>) -> Result<Self, EngineError> {
        let mut distinct = Vec::new();
        for content in contents {
            if !distinct.contains(&content) {
                distinct.push(content);
            }
        }
        if distinct.is_empty() {
            return Err(EngineError::InvalidConfig(
                "texture pool must not be empty".to_string(),
            ));
        }
        Ok(Self { contents: distinct })
    }

    /// The 7 vivid piece colors
    pub fn standard() -> Self {
        Self {
            contents: vec![
                TextureContent::Red,
                TextureContent::Blue,
                TextureContent::Green,
                TextureContent::Yellow,
                TextureContent::Orange,
                TextureContent::Purple,
                TextureContent::DarkGreen,
            ],
        }
    }

    /// Contents in insertion order
    pub fn contents(&self) -> &[TextureContent] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn contains(&self, content: TextureContent) -> bool {
        self.contents.contains(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_deduplicates() {
        let pool = TexturePool::new([
            TextureContent::Red,
            TextureContent::Blue,
            TextureContent::Red,
        ])
        .unwrap();

        assert_eq!(pool.len(), 2);
        assert!(pool.contains(TextureContent::Red));
        assert!(pool.contains(TextureContent::Blue));
    }

    #[test]
    fn test_pool_rejects_empty() {
        let result = TexturePool::new([]);
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_standard_pool_has_seven_vivid_colors() {
        let pool = TexturePool::standard();

        assert_eq!(pool.len(), 7);
        assert!(!pool.contains(TextureContent::Black));
        assert!(!pool.contains(TextureContent::White));
        assert!(!pool.contains(TextureContent::DarkBlue));
    }

    #[test]
    fn test_vivid_colors_map_to_distinct_rgb() {
        let pool = TexturePool::standard();

        for (i, a) in pool.contents().iter().enumerate() {
            for b in &pool.contents()[i + 1..] {
                assert_ne!(a.rgb(), b.rgb(), "{} and {}", a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_content_name_round_trip() {
        for content in TextureContent::ALL {
            assert_eq!(TextureContent::from_str(content.as_str()), Some(content));
        }
    }
}
