#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use crossterm::style::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hk97::display::Canvas;
use hk97::entities::{Controls, Rect};
use hk97::input::{InputEvent, InputSource};
use hk97::GameConfig;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Default geometry, but enemies never appear on their own.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        spawn_rate: 0.0,
        ..GameConfig::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill(Rect, Color),
    Text(i32, i32, String, Color),
    Present,
    Resize(u16, u16),
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<(i32, i32, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(x, y, s, _) => Some((*x, *y, s.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &DrawOp) -> usize {
        self.ops.iter().filter(|op| *op == wanted).count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        self.ops.push(DrawOp::Fill(rect, color));
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()> {
        self.ops.push(DrawOp::Text(x, y, text.to_string(), color));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Present);
        Ok(())
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.ops.push(DrawOp::Resize(cols, rows));
    }
}

/// Feeds one batch of events per frame, then quits.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub frames: VecDeque<Vec<InputEvent>>,
    pub held: Controls,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
            ..Self::default()
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        self.polls += 1;
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }

    fn controls(&self) -> Controls {
        self.held
    }
}
