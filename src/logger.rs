use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 로그 구독자를 초기화한다. `RUST_LOG`가 있으면 그 값을 우선한다.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "syringe_dose_calculator=debug,warn"
    } else {
        "syringe_dose_calculator=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 테스트 등에서 이미 설치된 경우에는 기존 구독자를 그대로 쓴다.
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
    if let Err(err) = installed {
        tracing::debug!("log subscriber already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        init_logger(false);
        init_logger(true);
        tracing::debug!("still logging after repeated init");
    }
}
