use anyhow::Result;
use log::info;
use seechunk_common::{
    config::SeeChunkConfig,
    math::Vec3F32,
    relation::Relation,
};
use seechunk_server::assets::SEE_CHUNK_CONFIG_PATH;
use server_loop::{
    ServerEvent,
    ServerLoop,
};
use std::{
    env,
    time::Duration,
};
use tokio::time;

mod server_loop;

const STEP_DELAY: Duration = Duration::from_millis(400);

// Plays a short session: two members enable borders and walk across chunk edges.
async fn script(tx: flume::Sender<ServerEvent>) {
    let events = [
        ServerEvent::Join {
            name: "Alice".to_owned(),
            position: Vec3F32::new([3.5, 64.0, 3.5]),
            relation: Relation::Leader,
        },
        ServerEvent::Join {
            name: "Bob".to_owned(),
            position: Vec3F32::new([-4.5, 70.0, 20.5]),
            relation: Relation::Enemy,
        },
        ServerEvent::SeeChunk {
            name: "alice".to_owned(),
            enabled: true,
        },
        ServerEvent::SeeChunk {
            name: "bob".to_owned(),
            enabled: true,
        },
        ServerEvent::Move {
            name: "alice".to_owned(),
            position: Vec3F32::new([17.5, 66.0, 3.5]),
        },
        ServerEvent::Move {
            name: "bob".to_owned(),
            position: Vec3F32::new([-4.5, 90.0, 20.5]),
        },
        ServerEvent::SeeChunk {
            name: "bob".to_owned(),
            enabled: false,
        },
        ServerEvent::Quit {
            name: "bob".to_owned(),
        },
        ServerEvent::Shutdown,
    ];

    for event in events {
        time::sleep(STEP_DELAY).await;

        if tx.send_async(event).await.is_err() {
            return;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| SEE_CHUNK_CONFIG_PATH.to_owned());

    let config = SeeChunkConfig::load(&config_path)?;

    info!("loaded {}: {:?}", config_path, config);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    rt.block_on(async move {
        let (event_tx, event_rx) = flume::unbounded();

        tokio::spawn(script(event_tx));

        ServerLoop { config, event_rx }.run().await
    })
}
