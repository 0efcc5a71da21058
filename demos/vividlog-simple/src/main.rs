use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;

use vividlog::appender::FanoutAppender;
use vividlog::appender_layer::AppenderLayer;
use vividlog::logger::VividLogger;
use vividlog::stdout_sink::StdoutSink;
use vividlog::theme::Theme;

fn main() {
  println!("vividlog Examples");
  println!("=================");

  // Logger handles decorate before they hit the engine; a plain fmt
  // subscriber prints whatever arrives.
  tracing_subscriber::fmt().with_target(false).init();

  example_basic_logging();
  example_themes();
  example_overrides();
  example_fanout();

  println!("\n=== All Examples Completed ===");
}

fn example_basic_logging() {
  println!("\n--- Basic logging ---");
  let logger = VividLogger::for_target("demo::basic");

  logger.trace("resolving configuration");
  logger.debug("cache warmed");
  logger.info("service started");
  logger.warn("disk usage at 80%");
  logger.error("upstream timed out");
  logger.success("deployment finished");
  logger.completed("migration done");
}

fn example_themes() {
  println!("\n--- Themes ---");
  let logger = VividLogger::for_target("demo::themes");

  for theme in [Theme::Nature, Theme::Tech, Theme::Gaming, Theme::Minimal] {
    logger.set_theme(theme);
    logger.info(&format!("hello from the {} theme", theme));
  }

  logger.set_theme(Theme::Colorful);
  logger.celebrate("We did it!");
  logger.rocket("Shipping v2");
  logger.progress("Crunching numbers");
}

fn example_overrides() {
  println!("\n--- Per-handle overrides ---");

  // Console handle keeps colors on even if the global config disables them.
  let console = VividLogger::for_target("demo::console").console();
  console.info("always colored");

  // File handle renders plain text for non-interactive sinks.
  let file = VividLogger::for_target("demo::file").file();
  file.info("never colored");

  // Positional arguments are substituted downstream, not here.
  let args: [&dyn std::fmt::Display; 2] = [&"alice", &3];
  file.info_with("user {} retried {} times", &args);
}

fn example_fanout() {
  println!("\n--- Fan-out appender ---");

  // Raw tracing events get decorated once by the appender and republished
  // to every attached sink.
  let appender = Arc::new(FanoutAppender::new());
  appender.set_theme("tech");
  appender.add_sink(Arc::new(StdoutSink::new()));
  appender.add_sink(Arc::new(StdoutSink::named("stdout-mirror")));

  let layer = AppenderLayer::new(Arc::clone(&appender));
  let subscriber = tracing_subscriber::Registry::default().with(layer);
  tracing::subscriber::with_default(subscriber, || {
    tracing::info!("deploy finished");
    tracing::warn!("disk usage at 90%");
    tracing::error!("disk full");
  });

  appender.detach_by_name("stdout-mirror");
}
