//! Plain text renderer for terminals and logs

use glam::Vec2;

use super::{RenderSink, Snapshot};
use crate::sim::{Outcome, TileKind};
use crate::tile_index;

const PLAYER_GLYPH: char = 'C';
const PURSUER_GLYPH: char = 'G';

/// Draws frames as ASCII art, keeping the latest one around
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    pub frame: String,
    pub score: u32,
    pub frames_drawn: u64,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One line per grid row plus a status line
    pub fn draw(frame: &Snapshot<'_>) -> String {
        let grid = frame.grid;
        let player = tile_index(Vec2::new(frame.player.x, frame.player.y), frame.tile_size);
        let pursuer = tile_index(
            Vec2::new(frame.pursuer.x, frame.pursuer.y),
            frame.tile_size,
        );

        let mut out = String::with_capacity((grid.cols() + 1) * (grid.rows() + 1));
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                let glyph = if (row, col) == pursuer {
                    PURSUER_GLYPH
                } else if (row, col) == player {
                    PLAYER_GLYPH
                } else {
                    match grid.tile_at(row, col) {
                        TileKind::Wall => '#',
                        TileKind::Collectible => '.',
                        TileKind::Open | TileKind::ConsumedCollectible => ' ',
                    }
                };
                out.push(glyph);
            }
            out.push('\n');
        }

        let status = match frame.outcome {
            Outcome::InProgress => "",
            Outcome::Won => "  YOU WIN",
            Outcome::Lost => "  CAUGHT",
        };
        out.push_str(&format!(
            "Score: {}  Pellets: {}  Tick: {}{}",
            frame.score, frame.remaining, frame.tick, status
        ));
        out
    }
}

impl RenderSink for TextRenderer {
    fn render(&mut self, frame: &Snapshot<'_>) {
        self.frame = Self::draw(frame);
        self.frames_drawn += 1;
    }

    fn score_changed(&mut self, score: u32) {
        self.score = score;
    }
}
