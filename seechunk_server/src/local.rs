//! In-process members and levels for a single-threaded host.

use crate::{
    entity::member::MemberId,
    host::{
        Level,
        Member,
    },
};
use log::info;
use seechunk_common::{
    entity::chunk::Chunk,
    math::Vec3F32,
    messages::Translatable,
    particle::Particle,
    relation::Relation,
};
use std::{
    cell::RefCell,
    rc::Rc,
};

pub struct MemberState {
    pub position: Vec3F32,
    pub relation: Relation,
    pub seeing_chunk: bool,
    pub inbox: Vec<Translatable>,
}

#[derive(Clone)]
pub struct LocalMember {
    name: Rc<str>,
    state: Rc<RefCell<MemberState>>,
}

impl LocalMember {
    pub fn new(name: &str, position: Vec3F32, relation: Relation) -> Self {
        Self {
            name: name.into(),
            state: Rc::new(RefCell::new(MemberState {
                position,
                relation,
                seeing_chunk: false,
                inbox: Vec::new(),
            })),
        }
    }

    pub fn chunk(&self) -> Chunk {
        Chunk::containing(self.state.borrow().position)
    }

    pub fn set_position(&self, position: Vec3F32) {
        self.state.borrow_mut().position = position;
    }

    pub fn set_relation(&self, relation: Relation) {
        self.state.borrow_mut().relation = relation;
    }

    pub fn take_inbox(&self) -> Vec<Translatable> {
        std::mem::take(&mut self.state.borrow_mut().inbox)
    }
}

impl Member for LocalMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_seeing_chunk(&self) -> bool {
        self.state.borrow().seeing_chunk
    }

    fn set_seeing_chunk(&mut self, value: bool) {
        self.state.borrow_mut().seeing_chunk = value;
    }

    fn position(&self) -> Vec3F32 {
        self.state.borrow().position
    }

    fn relation_to_plot(&self) -> Relation {
        self.state.borrow().relation
    }

    fn send_message(&mut self, message: Translatable) {
        info!("[{}] {}", self.name(), message.key);
        self.state.borrow_mut().inbox.push(message);
    }
}

pub struct LevelState {
    pub closed: bool,
    pub drawn: Vec<(Particle, Vec<MemberId>)>,
}

#[derive(Clone)]
pub struct LocalLevel(Rc<RefCell<LevelState>>);

impl LocalLevel {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(LevelState {
            closed: false,
            drawn: Vec::new(),
        })))
    }

    pub fn close(&self) {
        self.0.borrow_mut().closed = true;
    }

    pub fn open(&self) {
        self.0.borrow_mut().closed = false;
    }

    /// Particles drawn since the previous call.
    pub fn take_drawn(&self) -> Vec<(Particle, Vec<MemberId>)> {
        std::mem::take(&mut self.0.borrow_mut().drawn)
    }
}

impl Level for LocalLevel {
    fn is_closed(&self) -> bool {
        self.0.borrow().closed
    }

    fn add_particle(&mut self, particle: &Particle, viewers: &[MemberId]) {
        self.0
            .borrow_mut()
            .drawn
            .push((*particle, viewers.to_vec()));
    }
}
