use std::sync::{Arc, mpsc::channel};

use logify::{Level, colored_format, logger_config};

fn main() -> logify::Result<()> {
    // every thread shares one file, lines never interleave
    let log = Arc::new(
        logger_config()
            .with_dir("/tmp/logify_demo")
            .with_level(Level::Debug)
            .with_formatter(colored_format)
            .init()?,
    );
    log.info("Hello, world!");
    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            let log = Arc::clone(&log);
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        logify::log_at!(log, Level::Warning, "thread {i} received: {message}");
                    }
                    log.debug(format!("thread {i} done"));
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    log.close();
    let content = std::fs::read_to_string("/tmp/logify_demo/all.log").unwrap();
    println!(
        "last line of /tmp/logify_demo/all.log is:\n\t{}",
        content.trim_end().lines().last().unwrap_or_default()
    );
    Ok(())
}
