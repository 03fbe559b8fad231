//! Core domain: back-stack navigation between screens.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::GameState;

/// Request to open a screen, remembering the current one for `NavigateBack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigate(pub GameState);

impl Message for Navigate {}

/// Request to return to the previous screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateBack;

impl Message for NavigateBack {}

/// Screens visited before the current one, most recent last.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct ScreenHistory {
    stack: Vec<GameState>,
}

impl ScreenHistory {
    /// Record `current` and return the screen to switch to, or `None` if
    /// `to` is already showing. Boot is never recorded.
    pub fn navigate(&mut self, current: GameState, to: GameState) -> Option<GameState> {
        if current == to {
            return None;
        }
        if current != GameState::Boot {
            self.stack.push(current);
        }
        Some(to)
    }

    /// Pop the previous screen. With nothing recorded, fall back to the main
    /// menu unless it is already showing.
    pub fn back(&mut self, current: GameState) -> Option<GameState> {
        while let Some(previous) = self.stack.pop() {
            if previous != current {
                return Some(previous);
            }
        }

        (current != GameState::MainMenu).then_some(GameState::MainMenu)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
