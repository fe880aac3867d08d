//! Game state module - the complete simulation state and the fixed tick
//!
//! [`GameState::advance`] runs one tick in a fixed order:
//!
//! 1. queued input moves the agent, in arrival order
//! 2. pursuers retarget on the agent and step, in declaration order
//! 3. pellets under the agent are eaten
//! 4. pursuer contact costs lives and resets every entity to its spawn
//!
//! Each step sees the result of the previous one.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::entity::{Mobile, MobileEntity};
use crate::error::{GameError, MazeError};
use crate::maze::{MazeGrid, MazeLayout};
use crate::pellets::PelletSet;
use crate::pursuer::Pursuer;
use crate::snapshot::{EntitySnapshot, GameSnapshot};
use crate::types::*;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Agent moves that were applied.
    pub agent_moves: u32,
    /// Agent moves rejected by walls.
    pub blocked_moves: u32,
    pub pellets_eaten: u32,
    pub score_gained: u32,
    /// Pursuers overlapping the agent before the reset.
    pub collisions: u32,
    pub lives_lost: u32,
    pub quit: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    maze: MazeGrid,
    agent: MobileEntity,
    agent_spawn: Point,
    /// Declaration order is the update, reset and draw order.
    pursuers: ArrayVec<Pursuer, MAX_PURSUERS>,
    pellets: PelletSet,
    score: u32,
    lives: u32,
    running: bool,
    tick: u64,
}

impl GameState {
    /// Create a game on a parsed layout.
    pub fn new(layout: MazeLayout) -> Self {
        let MazeLayout {
            grid,
            agent_spawn,
            pursuer_spawns,
        } = layout;

        let agent_spawn = grid.cell_center(agent_spawn.0, agent_spawn.1);
        let pursuers = pursuer_spawns
            .iter()
            .zip(PursuerName::ALL)
            .map(|(&(gx, gy), name)| Pursuer::new(name, grid.cell_center(gx, gy), ENTITY_RADIUS))
            .collect();
        let pellets = PelletSet::for_maze(&grid);

        Self {
            agent: MobileEntity::new(EntityKind::Agent, agent_spawn, ENTITY_RADIUS),
            agent_spawn,
            pursuers,
            pellets,
            maze: grid,
            score: 0,
            lives: INITIAL_LIVES,
            running: true,
            tick: 0,
        }
    }

    /// Create a game on the built-in layout.
    pub fn classic() -> Result<Self, MazeError> {
        Ok(Self::new(MazeLayout::classic()?))
    }

    pub fn maze(&self) -> &MazeGrid {
        &self.maze
    }

    pub fn agent(&self) -> &MobileEntity {
        &self.agent
    }

    pub fn agent_spawn(&self) -> Point {
        self.agent_spawn
    }

    pub fn pursuers(&self) -> &[Pursuer] {
        &self.pursuers
    }

    pub fn pellets(&self) -> &PelletSet {
        &self.pellets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Quit was requested or no lives remain.
    pub fn game_over(&self) -> bool {
        !self.running || self.lives == 0
    }

    /// Request termination outside the input queue (e.g. a signal).
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Move the agent to the center of any walkable cell. Intended for
    /// scripted setups; normal play only moves through `advance`.
    pub fn set_agent_position(&mut self, position: Point) -> Result<(), GameError> {
        self.check_walkable(EntityKind::Agent, position)?;
        self.agent.place(position);
        Ok(())
    }

    /// Move pursuer `index` (declaration order) to the center of any walkable
    /// cell.
    ///
    /// Out-of-range indices are ignored and reported as `Ok(false)`.
    pub fn set_pursuer_position(&mut self, index: usize, position: Point) -> Result<bool, GameError> {
        let Some(kind) = self.pursuers.get(index).map(|p| p.entity().kind()) else {
            return Ok(false);
        };
        self.check_walkable(kind, position)?;
        self.pursuers[index].place(position);
        Ok(true)
    }

    /// Run one fixed tick with the actions queued since the previous tick.
    pub fn advance(&mut self, inputs: &[GameAction]) -> Result<TickReport, GameError> {
        let mut report = TickReport::default();
        if self.game_over() {
            return Ok(report);
        }

        // 1. Input, in arrival order.
        for action in inputs {
            match action.direction() {
                Some(dir) => {
                    let (dx, dy) = dir.delta();
                    if self.agent.attempt_move(dx, dy, &self.maze) {
                        report.agent_moves += 1;
                    } else {
                        report.blocked_moves += 1;
                    }
                }
                None => {
                    report.quit = true;
                }
            }
        }

        // 2. Pursuers chase the agent's current position.
        let target = self.agent.position();
        for pursuer in self.pursuers.iter_mut() {
            pursuer.update(target, &self.maze);
        }

        // 3. Pellets.
        report.pellets_eaten = self.pellets.remove_within(&self.agent.bounds());
        report.score_gained = report.pellets_eaten * PELLET_SCORE;
        self.score += report.score_gained;

        // 4. Collisions. Every overlapping pursuer costs a life.
        report.collisions = self
            .pursuers
            .iter()
            .filter(|p| p.overlaps(&self.agent))
            .count() as u32;
        if report.collisions > 0 {
            let before = self.lives;
            self.lives = self.lives.saturating_sub(report.collisions);
            report.lives_lost = before - self.lives;
            self.reset_positions();
            debug!(
                tick = self.tick,
                collisions = report.collisions,
                lives = self.lives,
                "agent caught, positions reset"
            );
            if self.lives == 0 {
                info!(tick = self.tick, score = self.score, "out of lives");
            }
        }

        self.check_positions()?;

        if report.quit {
            info!(tick = self.tick, score = self.score, "quit requested");
            self.running = false;
        }
        self.tick += 1;
        Ok(report)
    }

    /// Agent and every pursuer back to their spawn points.
    fn reset_positions(&mut self) {
        self.agent.place(self.agent_spawn);
        for pursuer in self.pursuers.iter_mut() {
            pursuer.reset();
        }
    }

    /// `p` must be the center of a walkable cell.
    fn check_walkable(&self, entity: EntityKind, p: Point) -> Result<(), GameError> {
        let (gx, gy) = self.maze.pixel_to_grid(p.x, p.y);
        if self.maze.is_walkable_pixel(p) && self.maze.cell_center(gx, gy) == p {
            Ok(())
        } else {
            Err(GameError::InvariantViolation {
                entity,
                x: p.x,
                y: p.y,
            })
        }
    }

    fn check_positions(&self) -> Result<(), GameError> {
        self.check_walkable(EntityKind::Agent, self.agent.position())?;
        for pursuer in &self.pursuers {
            self.check_walkable(pursuer.entity().kind(), pursuer.position())?;
        }
        Ok(())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.maze.cols();
        out.rows = self.maze.rows();
        out.cell_size = self.maze.cell_size();
        out.cells.clear();
        out.cells.extend_from_slice(self.maze.cells());
        out.pellets.clear();
        out.pellets.extend_from_slice(self.pellets.points());
        out.agent = entity_snapshot(&self.agent);
        out.pursuers.clear();
        for pursuer in &self.pursuers {
            out.pursuers.push(entity_snapshot(pursuer.entity()));
        }
        out.score = self.score;
        out.lives = self.lives;
        out.running = self.running;
        out.game_over = self.game_over();
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

fn entity_snapshot(entity: &MobileEntity) -> EntitySnapshot {
    EntitySnapshot {
        kind: entity.kind(),
        position: entity.position(),
        radius: entity.radius(),
    }
}
