use crate::{
    component::member::see_chunk::{
        SeeChunkMemberComponent,
        SeenChunk,
    },
    entity::member::MemberId,
    host::{
        Level,
        Member,
        TaskLoop,
        TraceEvent,
    },
};
use log::{
    debug,
    trace,
};
use seechunk_common::{
    border::{
        BorderError,
        Brush,
    },
    config::{
        ConfigError,
        SeeChunkConfig,
    },
    entity::chunk::Chunk,
    messages::{
        Translatable,
        SEE_CHUNK_DISABLED_ENGINE_STOP,
    },
};
use std::slice;

/// Draws the border of the chunk each opted-in member stands in.
///
/// The redraw loop runs only while at least one member is tracked.
pub struct BorderTracker<M, L, T> {
    config: SeeChunkConfig,
    seen_mc: SeeChunkMemberComponent<M, L>,
    task_loop: T,
}

impl<M, L, T> BorderTracker<M, L, T>
where
    M: Member,
    L: Level,
    T: TaskLoop,
{
    pub fn new(config: SeeChunkConfig, task_loop: T) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            seen_mc: SeeChunkMemberComponent::new(),
            task_loop,
        })
    }

    pub fn task_loop(&self) -> &T {
        &self.task_loop
    }

    pub fn task_loop_mut(&mut self) -> &mut T {
        &mut self.task_loop
    }

    pub fn len(&self) -> usize {
        self.seen_mc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen_mc.is_empty()
    }

    /// Chunk the member currently sees the border of.
    pub fn seen_chunk(&self, member: &MemberId) -> Option<Chunk> {
        self.seen_mc.get(member).map(SeenChunk::chunk)
    }

    /// Sets the chunk a member sees, replacing the previous one.
    ///
    /// The previous chunk is dropped even if the new border can not be built.
    pub fn start(&mut self, member: M, chunk: Chunk, level: L) -> Result<(), BorderError> {
        let id = member.id();

        if let Some(previous) = self.seen_mc.remove(&id) {
            trace!("{} leaves chunk {}", id, previous.chunk());
        }

        let y = member.position()[1].floor() + self.config.y_offset;
        let kind = self
            .config
            .brush
            .particle_kind(member.relation_to_plot());

        let brush = match Brush::new(chunk, self.config.step, y, kind) {
            Ok(brush) => brush,
            Err(err) => {
                self.stop_idle_loop();
                return Err(err);
            },
        };

        debug!("{} sees chunk {} ({} particles)", id, chunk, brush.len());

        self.seen_mc.insert(
            id,
            SeenChunk {
                member,
                brush,
                level,
            },
        );

        if !self.task_loop.is_looping() {
            self.task_loop.start_loop(self.config.tick_interval);
        }

        Ok(())
    }

    pub fn stop(&mut self, member: &MemberId) {
        if let Some(seen) = self.seen_mc.remove(member) {
            debug!("{} no longer sees chunk {}", member, seen.chunk());
        }

        self.stop_idle_loop();
    }

    pub fn stop_member(&mut self, member: &M) {
        self.stop(&member.id());
    }

    /// Panics in `strict` mode if the member stopped seeing chunks
    /// without telling the tracker.
    pub fn is_tracking(&self, member: &M, strict: bool) -> bool {
        let seen = self.seen_mc.get(&member.id());

        if member.is_seeing_chunk() {
            return seen.is_some();
        }

        if let Some(seen) = seen {
            if strict {
                panic!(
                    "member '{}' is seeing chunk {} with invalid request",
                    member.name(),
                    seen.chunk()
                );
            }
        }

        false
    }

    /// Follows a member into another chunk.
    pub fn on_trace(&mut self, event: TraceEvent<M, L>) -> Result<(), BorderError> {
        let TraceEvent { member, to } = event;

        if !member.is_seeing_chunk() {
            return Ok(());
        }

        self.start(member, to.chunk, to.level)
    }

    pub fn on_quit(&mut self, member: &M) {
        self.stop_member(member);
    }

    /// Redraws every border at the current height of its member.
    pub fn on_tick(&mut self, tick: u64) {
        let fan = self.config.fan();
        let mut heights = Vec::with_capacity(fan.count());

        for (id, seen) in self.seen_mc.iter_mut() {
            let SeenChunk {
                member,
                brush,
                level,
            } = seen;

            if level.is_closed() {
                trace!("tick {}: level of {} is closed, skipping", tick, id);
                continue;
            }

            heights.clear();
            heights.extend(fan.heights(member.position()[1]));

            for particle in brush.at_heights(&heights) {
                level.add_particle(&particle, slice::from_ref(id));
            }

            trace!(
                "tick {}: drew chunk {} for {} on {} levels",
                tick,
                brush.chunk(),
                id,
                heights.len()
            );
        }
    }

    /// Removes every border, telling members why.
    pub fn cancel(&mut self) {
        for (_, mut seen) in self.seen_mc.drain() {
            seen.member.set_seeing_chunk(false);
            seen.member
                .send_message(Translatable::new(SEE_CHUNK_DISABLED_ENGINE_STOP));
        }

        self.stop_idle_loop();
    }

    fn stop_idle_loop(&mut self) {
        if self.seen_mc.is_empty() && self.task_loop.is_looping() {
            self.task_loop.stop_loop();
        }
    }
}
