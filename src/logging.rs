use tracing_subscriber::EnvFilter;

/// `RUST_LOG`을 따르는 fmt 구독자를 설치한다. 기본 레벨은 warn이며 stderr로 출력한다.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // 이미 설치된 경우(테스트 등)는 무시한다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
