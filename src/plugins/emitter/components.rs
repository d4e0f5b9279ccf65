use std::collections::VecDeque;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A transient bubble.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Seconds since spawn.
    pub age: f32,
    /// 1.0 for the active (head) bubble, dimmed otherwise.
    pub opacity: f32,
    /// Drift anchor (x, y) captured at spawn.
    pub start_offset: Vec2,
    /// Waiting behind the head of an emitter queue. Held bubbles do not drift.
    pub held: bool,
}

impl Bubble {
    pub fn new(start_offset: Vec2, opacity: f32) -> Self {
        Self {
            age: 0.0,
            opacity,
            start_offset,
            held: false,
        }
    }

    pub fn queued(start_offset: Vec2, opacity: f32) -> Self {
        Self {
            held: true,
            ..Self::new(start_offset, opacity)
        }
    }
}

/// Head of an emitter queue changed between two ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadChange {
    pub previous: Option<Entity>,
    pub active: Option<Entity>,
}

/// Owns an ordered FIFO of bubbles. The head is the active bubble.
///
/// Only the emitter systems mutate the queue. Spawning itself is left to the caller
/// (see [`BubbleEmitter::ensure_minimum_queue_length`]) so the queue rules stay plain data.
#[derive(Component, Debug, Default, Clone)]
pub struct BubbleEmitter {
    queue: VecDeque<Entity>,
    /// Refill target. Zero means the queue never refills.
    pub min_queue_len: usize,
    /// Bubbles in one set (a practitioner's reps). `None` means an endless set.
    pub set_size: Option<u32>,
    spawned: u32,
    /// Head as of the last opacity refresh.
    shown_head: Option<Entity>,
}

impl BubbleEmitter {
    pub fn new(min_queue_len: usize) -> Self {
        Self {
            min_queue_len,
            ..default()
        }
    }

    pub fn with_set_size(mut self, set_size: u32) -> Self {
        self.set_size = Some(set_size);
        self
    }

    #[inline]
    pub fn active_bubble(&self) -> Option<Entity> {
        self.queue.front().copied()
    }

    pub fn queue(&self) -> impl ExactSizeIterator<Item = Entity> + '_ {
        self.queue.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, bubble: Entity) -> bool {
        self.queue.contains(&bubble)
    }

    #[inline]
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    fn has_spawn_budget(&self) -> bool {
        self.set_size.is_none_or(|size| self.spawned < size)
    }

    /// Whether an empty queue would ever be refilled.
    pub fn can_refill(&self) -> bool {
        self.min_queue_len > 0 && self.has_spawn_budget()
    }

    /// Empty for good: the set is complete.
    pub fn is_set_complete(&self) -> bool {
        self.queue.is_empty() && !self.can_refill()
    }

    /// Append one bubble from `spawn` if the queue holds fewer than `n`.
    ///
    /// At most one bubble per call, so repeated calls converge on `n` and then do nothing.
    pub fn ensure_minimum_queue_length(
        &mut self,
        n: usize,
        spawn: impl FnOnce() -> Entity,
    ) -> Option<Entity> {
        if self.queue.len() >= n || !self.has_spawn_budget() {
            return None;
        }
        let bubble = spawn();
        self.queue.push_back(bubble);
        self.spawned += 1;
        Some(bubble)
    }

    /// Remove `bubble` wherever it is queued. The caller destroys the entity.
    pub fn remove_bubble(&mut self, bubble: Entity) -> bool {
        let Some(index) = self.queue.iter().position(|e| *e == bubble) else {
            return false;
        };
        self.queue.remove(index);
        true
    }

    /// Drop references that no longer resolve to a live bubble.
    pub fn retain(&mut self, mut live: impl FnMut(Entity) -> bool) {
        self.queue.retain(|e| live(*e));
    }

    /// Report a head change since the last call, if any.
    pub fn take_head_change(&mut self) -> Option<HeadChange> {
        let active = self.active_bubble();
        if active == self.shown_head {
            return None;
        }
        let previous = std::mem::replace(&mut self.shown_head, active);
        Some(HeadChange { previous, active })
    }
}

/// Countdown that drops a free bubble near its emitter every time it elapses.
#[derive(Component, Debug, Clone)]
pub struct TimedSpawner {
    pub timer: Timer,
}

impl TimedSpawner {
    pub fn every(seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Repeating),
        }
    }
}

/// Randomness for spawn placement. Seed it for reproducible sessions.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}
