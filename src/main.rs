use std::sync::Arc;

use vestnik::{logging, ChannelSink, NewsItem, NewsRegistry, Settings, Subscriber, TracingSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    logging::init_logging(&settings);

    let log_sink = Arc::new(TracingSink);
    let (queue_sink, mut queue_rx) = ChannelSink::new(settings.queue_capacity);
    let mut registry = NewsRegistry::new();

    let mut yura = Subscriber::new("Yura", log_sink.clone());
    yura.subscribe_to_topic("tech");
    registry.add_subscriber(yura);

    let mut dima = Subscriber::new("Dima", log_sink);
    dima.subscribe_to_video();
    registry.add_subscriber(dima);

    let mut ana = Subscriber::new("Ana", Arc::new(queue_sink));
    ana.subscribe_to_all_text();
    registry.add_subscriber(ana);

    let text = NewsItem::text("New technology launch", ["tech"], "The newest tech worldwide!")?;
    let video = NewsItem::video("Tech event highlights", ["tech"], "https://video-url.com")?;

    for item in [text, video] {
        let report = registry.publish(item);
        tracing::info!(
            matched = report.matched,
            delivered = report.delivered,
            delivery_errors = report.delivery_errors,
            "publish finished"
        );
    }

    // подписчики дропаются вместе с реестром, очередь закрывается
    drop(registry);
    while let Some(notification) = queue_rx.recv().await {
        tracing::info!(
            recipient = %notification.recipient,
            title = %notification.title,
            "drained from queue"
        );
    }

    Ok(())
}
