use clap::Parser;
use vero_convert::domain::ports::ConfigProvider;
use vero_convert::utils::{logger, validation::Validate};
use vero_convert::{CliConfig, ConvertEngine, ConvertPipeline, FieldMapping, LocalStorage, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting vero-convert");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(config_path) => {
            tracing::info!("📁 Loading configuration from: {}", config_path);

            // 載入 TOML 配置
            let config = match TomlConfig::from_file(config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            validate_or_exit(&config);

            // 命令列的 --monitor 可以蓋過配置檔
            let monitor_enabled = cli.monitor || config.monitoring_enabled();
            run_conversion(config, monitor_enabled)
        }
        None => {
            validate_or_exit(&cli);
            let monitor_enabled = cli.monitor;
            run_conversion(cli.clone(), monitor_enabled)
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                vero_convert::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                vero_convert::utils::error::ErrorSeverity::Medium => 2, // 資料錯誤
                vero_convert::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                vero_convert::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn validate_or_exit<C: Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

fn run_conversion<C: ConfigProvider>(
    config: C,
    monitor_enabled: bool,
) -> vero_convert::Result<String> {
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    tracing::info!("📥 Input: {}", config.input_path());
    tracing::info!("📤 Output: {}", config.output_path());

    // 創建存儲和管道
    let storage = LocalStorage::new();
    let pipeline = ConvertPipeline::new(storage, config, FieldMapping::default());

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run()
}
