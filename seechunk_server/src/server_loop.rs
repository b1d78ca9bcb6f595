use ahash::AHashMap;
use futures_lite::stream::{
    self,
    StreamExt,
};
use log::{
    debug,
    info,
    warn,
};
use seechunk_common::{
    config::SeeChunkConfig,
    entity::chunk::Chunk,
    math::Vec3F32,
    relation::Relation,
};
use seechunk_server::{
    entity::member::MemberId,
    host::{
        Location,
        Member,
        TraceEvent,
    },
    local::{
        LocalLevel,
        LocalMember,
    },
    resource::interval_task::IntervalTask,
    system::see_chunk::BorderTracker,
    TICK_DURATION,
};
use tokio::time::{
    self,
    MissedTickBehavior,
};

// Server loop input
pub enum ServerEvent {
    Tick,
    Join {
        name: String,
        position: Vec3F32,
        relation: Relation,
    },
    SeeChunk {
        name: String,
        enabled: bool,
    },
    Move {
        name: String,
        position: Vec3F32,
    },
    Quit {
        name: String,
    },
    Shutdown,
}

pub struct ServerLoop {
    pub config: SeeChunkConfig,
    pub event_rx: flume::Receiver<ServerEvent>,
}

impl ServerLoop {
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let Self { config, event_rx } = self;

        let level = LocalLevel::new();
        let mut members = AHashMap::<MemberId, LocalMember>::new();
        let mut tracker = BorderTracker::new(config, IntervalTask::new())?;
        let mut current_tick = 0u64;

        let mut tick_interval = time::interval(TICK_DURATION);
        tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut stream = stream::poll_fn(|cx| {
            tick_interval
                .poll_tick(cx)
                .map(|_| Some(ServerEvent::Tick))
        })
        .or(event_rx.stream());

        while let Some(event) = stream.next().await {
            match event {
                ServerEvent::Tick => {
                    current_tick += 1;

                    if tracker.task_loop_mut().record_next(current_tick) {
                        tracker.on_tick(current_tick);

                        let drawn = level.take_drawn();
                        if !drawn.is_empty() {
                            debug!(
                                "tick {}: {} particles for {} members",
                                current_tick,
                                drawn.len(),
                                tracker.len()
                            );
                        }
                    }
                },
                ServerEvent::Join {
                    name,
                    position,
                    relation,
                } => {
                    info!("{} joined", name);
                    members.insert(
                        MemberId::new(&name),
                        LocalMember::new(&name, position, relation),
                    );
                },
                ServerEvent::SeeChunk { name, enabled } => {
                    let Some(member) = members.get(&MemberId::new(&name)) else {
                        warn!("seechunk for unknown member {}", name);
                        continue;
                    };

                    let mut member = member.clone();
                    member.set_seeing_chunk(enabled);

                    if enabled {
                        let chunk = member.chunk();
                        if let Err(err) = tracker.start(member, chunk, level.clone()) {
                            warn!("{}: {}", name, err);
                        }
                    } else {
                        tracker.stop_member(&member);
                    }
                },
                ServerEvent::Move { name, position } => {
                    let Some(member) = members.get(&MemberId::new(&name)) else {
                        continue;
                    };

                    let from = member.chunk();
                    member.set_position(position);
                    let to = Chunk::containing(position);

                    if from != to {
                        let trace = TraceEvent {
                            member: member.clone(),
                            to: Location {
                                chunk: to,
                                level: level.clone(),
                            },
                        };

                        if let Err(err) = tracker.on_trace(trace) {
                            warn!("{}: {}", name, err);
                        }
                    }
                },
                ServerEvent::Quit { name } => {
                    if let Some(member) = members.remove(&MemberId::new(&name)) {
                        tracker.on_quit(&member);
                        info!("{} left", name);
                    }
                },
                ServerEvent::Shutdown => {
                    tracker.cancel();
                    return Ok(());
                },
            }
        }

        tracker.cancel();

        Ok(())
    }
}
