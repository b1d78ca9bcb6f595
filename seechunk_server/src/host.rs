//! What the tracker needs from the server it runs in.

use crate::entity::member::MemberId;
use seechunk_common::{
    entity::chunk::Chunk,
    math::Vec3F32,
    messages::Translatable,
    particle::Particle,
    relation::Relation,
};

/// Handle to an online member.
pub trait Member {
    fn name(&self) -> &str;

    fn id(&self) -> MemberId {
        MemberId::new(self.name())
    }

    /// Whether the member asked to see chunk borders.
    fn is_seeing_chunk(&self) -> bool;

    fn set_seeing_chunk(&mut self, value: bool);

    /// Current position, read on every redraw.
    fn position(&self) -> Vec3F32;

    fn relation_to_plot(&self) -> Relation;

    fn send_message(&mut self, message: Translatable);
}

/// Handle to a loaded level.
pub trait Level {
    fn is_closed(&self) -> bool;

    /// Fire and forget, only `viewers` receive the particle.
    fn add_particle(&mut self, particle: &Particle, viewers: &[MemberId]);
}

/// Repeating task driven by the host scheduler.
pub trait TaskLoop {
    fn start_loop(&mut self, interval: u32);

    fn stop_loop(&mut self);

    fn is_looping(&self) -> bool;
}

pub struct Location<L> {
    pub chunk: Chunk,
    pub level: L,
}

/// Member moved to another chunk.
pub struct TraceEvent<M, L> {
    pub member: M,
    pub to: Location<L>,
}
