use crate::entity::member::MemberId;
use ahash::AHashMap;

pub mod see_chunk;

pub struct MemberComponent<T> {
    data: AHashMap<MemberId, T>,
}

impl<T> MemberComponent<T> {
    pub fn new() -> Self {
        Self {
            data: AHashMap::new(),
        }
    }

    pub fn get(&self, member: &MemberId) -> Option<&T> {
        self.data.get(member)
    }

    pub fn insert(&mut self, member: MemberId, value: T) -> Option<T> {
        self.data.insert(member, value)
    }

    pub fn remove(&mut self, member: &MemberId) -> Option<T> {
        self.data.remove(member)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&MemberId, &mut T)> {
        self.data.iter_mut()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (MemberId, T)> + '_ {
        self.data.drain()
    }
}

impl<T> Default for MemberComponent<T> {
    fn default() -> Self {
        Self::new()
    }
}
