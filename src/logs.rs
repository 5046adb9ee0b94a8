use log::LevelFilter;
use log4rs::{
    Config,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

/// Logs to stderr at info level; when LOG_FILE_PATH and
/// LOG_ARCHIVE_PATTERN are set, additionally to a size-rolled file at
/// debug level.
pub fn init_logger() {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    let mut config = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(LevelFilter::Info)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let (Ok(file_path), Ok(archive_pattern)) = (
        std::env::var("LOG_FILE_PATH"),
        std::env::var("LOG_ARCHIVE_PATTERN"),
    ) {
        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller = FixedWindowRoller::builder()
            .build(&archive_pattern, LOG_FILE_COUNT)
            .expect("Invalid LOG_ARCHIVE_PATTERN");
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d} {l} - {m}\n")))
            .build(file_path, Box::new(policy))
            .expect("Failed to create log file appender");

        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    let config = config
        .build(root.build(LevelFilter::Trace))
        .expect("Failed to build logger config");

    let _handle = log4rs::init_config(config).expect("Failed to initialize logger");
}
