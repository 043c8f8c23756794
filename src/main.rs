use anyhow::Context;
use clap::Parser;
use lifeui_core::adapters::JsonFileCatalog;
use lifeui_core::config::cli::{Command, SubmitArgs};
use lifeui_core::domain::category::ContactItemType;
use lifeui_core::domain::ports::InquiryLog;
use lifeui_core::utils::error::ErrorSeverity;
use lifeui_core::utils::{logger, validation::Validate};
use lifeui_core::{
    AppConfig, AppError, AppState, Cli, HttpInquiryGateway, JsonFileStore, StaticCatalog,
    UiSettings,
};

type State = AppState<HttpInquiryGateway, JsonFileStore>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config file '{}'", cli.config))?;

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose || config.logging.level == "debug");
    }

    tracing::info!("🚀 Starting lifeui CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let gateway = HttpInquiryGateway::from_config(&config.gateway)?;
    let store = JsonFileStore::new(&config.storage.path);
    let mut state = AppState::with_settings(gateway, store, UiSettings::from(&config.ui));
    state = match &config.storage.catalog_path {
        Some(path) => state.with_catalog_source(JsonFileCatalog::new(path)),
        None => state.with_catalog_source(StaticCatalog::with_delay(
            config.ui.simulated_load_delay(),
        )),
    };

    if let Err(e) = run(&mut state, cli.command).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::High => 4,
            ErrorSeverity::Critical => 1,
        };
        std::process::exit(exit_code);
    }

    if let Some(warning) = state.persistence_warning() {
        eprintln!("⚠️ {}", warning);
    }

    Ok(())
}

async fn run(state: &mut State, command: Command) -> Result<(), AppError> {
    match command {
        Command::Inquiries => return list_inquiries(state).await,
        Command::Submit(args) if args.draft => {
            fill_form(state, args);
            state.save_draft();
            println!("📝 草稿已儲存");
            return Ok(());
        }
        _ => {}
    }

    state.load_catalog().await?;

    match command {
        Command::Services { category } => {
            let category = category.unwrap_or_default();
            state.set_selected_category(category);
            println!("{}", category.display_name());
            for service in state.filtered_services() {
                print_service(state, service);
            }
        }
        Command::Show { service_id } => {
            let service = state.find_service(&service_id).ok_or_else(|| AppError::ValidationError {
                message: format!("找不到服務：{}", service_id),
            })?;
            state.track_service_view(service);
            print_service(state, service);
            println!("    {}", service.description);
            for feature in &service.features {
                println!("  • {}", feature);
            }
            if let Some(price) = &service.price {
                for item in &price.additional_items {
                    println!("  + {} {}", item.name, item.formatted_price());
                }
            }
        }
        Command::Popular => {
            for service in state.popular_services() {
                print_service(state, service);
            }
        }
        Command::Packages => {
            for package in state.service_packages() {
                let badge = if package.is_recommended { "⭐ " } else { "" };
                println!(
                    "{}{}  {}（原價 {}，{}，{}% off）",
                    badge,
                    package.title,
                    package.formatted_price(),
                    package.formatted_original_price(),
                    package.formatted_savings(),
                    package.discount_percentage()
                );
                println!("    {}", package.included_services.join("、"));
            }
        }
        Command::Search { query } => {
            let hits = state.search_services(&query);
            if hits.is_empty() {
                println!("找不到符合「{}」的服務", query);
            }
            for service in hits {
                print_service(state, service);
            }
        }
        Command::Faq { category } => {
            let items = match category {
                Some(category) => state.faqs_by_category(category),
                None => state.faq_items(),
            };
            for item in items {
                println!("[{}] {}", item.category.display_name(), item.question);
                println!("    {}", item.answer);
            }
        }
        Command::Contact => {
            state.refresh_contact_info();
            let info = state.contact_info();
            for (item, value) in info.items() {
                let marker = if item.is_actionable() { "📞 " } else { "   " };
                println!("{}{}：{}", marker, item.display_name(), value);
            }
            println!("   營業時間：{}", info.business_hours.office);
            for note in &info.transportation_info {
                println!("  • {}", note);
            }
        }
        Command::Estimate { service_ids } => {
            let mut selected = Vec::new();
            for id in &service_ids {
                match state.find_service(id) {
                    Some(service) => selected.push(service),
                    None => {
                        return Err(AppError::ValidationError {
                            message: format!("找不到服務：{}", id),
                        })
                    }
                }
            }
            let total = state.estimated_price(selected);
            println!("預估費用：{}", state.format_price(total));
        }
        Command::Submit(args) => {
            fill_form(state, args);
            state.submit_contact_form().await?;
            println!("✅ 表單已送出，我們會盡快與您聯絡");
        }
        Command::Favorite { service_id } => {
            if state.find_service(&service_id).is_none() {
                return Err(AppError::ValidationError {
                    message: format!("找不到服務：{}", service_id),
                });
            }
            if state.toggle_favorite(&service_id) {
                println!("❤️ 已加入收藏：{}", service_id);
            } else {
                println!("已移除收藏：{}", service_id);
            }
        }
        Command::Favorites => {
            for service in state.favorite_services() {
                print_service(state, service);
            }
        }
        Command::Emergency => {
            state.track_emergency_call();
            state.schedule_emergency_reminder();
            println!(
                "📞 {}：{}",
                ContactItemType::Emergency.display_name(),
                state.contact_info().emergency_phone
            );
        }
        Command::Inquiries => {}
    }

    Ok(())
}

fn fill_form(state: &mut State, args: SubmitArgs) {
    if args.resume {
        state.restore_draft();
    }
    args.apply_to(state.contact_form_mut());
}

fn print_service(state: &State, service: &lifeui_core::Service) {
    let favorite = if state.is_favorite(&service.id) { "❤️ " } else { "" };
    let price = service
        .price
        .as_ref()
        .map(|p| p.formatted_price_range())
        .unwrap_or_else(|| "價格洽詢".to_string());
    println!(
        "{}{} [{}] {} - {}（{}）",
        favorite,
        service.title,
        service.id,
        service.subtitle,
        price,
        service.estimated_duration
    );
}

async fn list_inquiries(state: &State) -> Result<(), AppError> {
    let records = state.gateway().list_inquiries().await?;
    if records.is_empty() {
        println!("目前沒有諮詢紀錄");
    }
    for record in records {
        let name = if record.name.is_empty() {
            "未知"
        } else {
            record.name.as_str()
        };
        let kind = if record.inquiry_type.is_empty() {
            "一般諮詢"
        } else {
            record.inquiry_type.as_str()
        };
        let when = record
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{} ({}) {} {}", name, kind, record.phone, when);
        if !record.email.is_empty() {
            println!("    {}", record.email);
        }
        println!("    {}", record.message);
    }
    Ok(())
}
