use crate::component::member::MemberComponent;
use seechunk_common::{
    border::Brush,
    entity::chunk::Chunk,
};

/// Border of the chunk a member is looking at.
pub struct SeenChunk<M, L> {
    pub member: M,
    pub brush: Brush,
    pub level: L,
}

impl<M, L> SeenChunk<M, L> {
    pub fn chunk(&self) -> Chunk {
        self.brush.chunk()
    }
}

/// At most one seen chunk per member.
pub type SeeChunkMemberComponent<M, L> = MemberComponent<SeenChunk<M, L>>;
