use crate::domain::category::{ContactSubject, FaqCategory, PreferredTime, ServiceCategory};
use crate::domain::form::ContactForm;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "lifeui")]
#[command(about = "冬山生命禮儀 service catalog and inquiry client")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = super::DEFAULT_CONFIG_FILE)]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List services, optionally filtered by category
    Services {
        #[arg(long, value_parser = parse_category)]
        category: Option<ServiceCategory>,
    },
    /// Show a single service in detail
    Show { service_id: String },
    /// Show popular services
    Popular,
    /// Show service packages, recommended first
    Packages,
    /// Search services by keyword
    Search { query: String },
    /// Show frequently asked questions
    Faq {
        #[arg(long, value_parser = parse_faq_category)]
        category: Option<FaqCategory>,
    },
    /// Show contact information
    Contact,
    /// Sum the base prices of the given services
    Estimate {
        #[arg(required = true)]
        service_ids: Vec<String>,
    },
    /// Submit a contact inquiry
    Submit(SubmitArgs),
    /// List submitted inquiries, newest first
    Inquiries,
    /// Toggle a service as favorite
    Favorite { service_id: String },
    /// List favorite services
    Favorites,
    /// Record that the emergency line was called
    Emergency,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Inquiry subject; general unless given (kept from the draft with --resume)
    #[arg(long, value_parser = parse_subject)]
    pub subject: Option<ContactSubject>,

    #[arg(long, default_value = "")]
    pub message: String,

    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub urgent: Option<bool>,

    #[arg(long, value_parser = parse_preferred_time)]
    pub preferred_time: Option<PreferredTime>,

    #[arg(long, help = "Agree to the privacy terms")]
    pub agree: bool,

    #[arg(long, help = "Save as a local draft instead of submitting")]
    pub draft: bool,

    #[arg(long, help = "Start from the saved draft; flags override its fields")]
    pub resume: bool,
}

impl SubmitArgs {
    /// 填入表單；`--resume` 時只覆寫有指定的欄位，其餘沿用草稿
    pub fn apply_to(self, form: &mut ContactForm) {
        if !self.resume {
            *form = ContactForm::default();
        }
        overwrite(&mut form.name, self.name);
        overwrite(&mut form.phone, self.phone);
        overwrite(&mut form.email, self.email);
        overwrite(&mut form.message, self.message);
        if let Some(subject) = self.subject {
            form.subject = subject;
        }
        if let Some(time) = self.preferred_time {
            form.preferred_contact_time = time;
        }
        if let Some(urgent) = self.urgent {
            form.is_urgent = urgent;
        }
        if self.agree {
            form.agreed_to_terms = true;
        }
    }
}

fn overwrite(field: &mut String, value: String) {
    if !value.is_empty() {
        *field = value;
    }
}

fn parse_category(value: &str) -> Result<ServiceCategory, String> {
    value.parse().map_err(|e: crate::utils::error::AppError| e.to_string())
}

fn parse_faq_category(value: &str) -> Result<FaqCategory, String> {
    value.parse().map_err(|e: crate::utils::error::AppError| e.to_string())
}

fn parse_subject(value: &str) -> Result<ContactSubject, String> {
    value.parse().map_err(|e: crate::utils::error::AppError| e.to_string())
}

fn parse_preferred_time(value: &str) -> Result<PreferredTime, String> {
    value.parse().map_err(|e: crate::utils::error::AppError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_command() {
        let cli = Cli::try_parse_from([
            "lifeui",
            "submit",
            "--name",
            "王小明",
            "--phone",
            "0912345678",
            "--subject",
            "appointment",
            "--message",
            "預約參觀",
            "--agree",
        ])
        .unwrap();

        match cli.command {
            Command::Submit(args) => {
                assert_eq!(args.subject, Some(ContactSubject::Appointment));
                assert_eq!(args.preferred_time, None);
                assert_eq!(args.urgent, None);
                assert!(args.agree);
                assert!(!args.draft);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, "lifeui.toml");
    }

    #[test]
    fn test_resume_flags_are_optional() {
        let cli = Cli::try_parse_from([
            "lifeui",
            "submit",
            "--resume",
            "--urgent",
            "--preferred-time",
            "evening",
        ])
        .unwrap();

        match cli.command {
            Command::Submit(args) => {
                assert!(args.resume);
                assert_eq!(args.urgent, Some(true));
                assert_eq!(args.preferred_time, Some(PreferredTime::Evening));
                assert_eq!(args.subject, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resume_keeps_draft_fields_not_given() {
        let mut draft = ContactForm {
            name: "黃太太".to_string(),
            phone: "0912345678".to_string(),
            subject: ContactSubject::Appointment,
            preferred_contact_time: PreferredTime::Morning,
            is_urgent: true,
            agreed_to_terms: true,
            ..ContactForm::default()
        };

        let cli = Cli::try_parse_from(["lifeui", "submit", "--resume", "--message", "改約下週"])
            .unwrap();
        let Command::Submit(args) = cli.command else {
            panic!("expected submit command");
        };
        args.apply_to(&mut draft);

        assert_eq!(draft.name, "黃太太");
        assert_eq!(draft.message, "改約下週");
        assert_eq!(draft.subject, ContactSubject::Appointment);
        assert_eq!(draft.preferred_contact_time, PreferredTime::Morning);
        assert!(draft.is_urgent);
        assert!(draft.agreed_to_terms);
    }

    #[test]
    fn test_without_resume_unspecified_fields_use_defaults() {
        let mut form = ContactForm {
            subject: ContactSubject::Complaint,
            is_urgent: true,
            ..ContactForm::default()
        };

        let cli = Cli::try_parse_from(["lifeui", "submit", "--name", "王小明"]).unwrap();
        let Command::Submit(args) = cli.command else {
            panic!("expected submit command");
        };
        args.apply_to(&mut form);

        assert_eq!(form.name, "王小明");
        assert_eq!(form.subject, ContactSubject::General);
        assert_eq!(form.preferred_contact_time, PreferredTime::Anytime);
        assert!(!form.is_urgent);
    }

    #[test]
    fn test_parse_category_filter() {
        let cli = Cli::try_parse_from(["lifeui", "services", "--category", "memorial"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Services {
                category: Some(ServiceCategory::Memorial)
            }
        ));
        assert!(Cli::try_parse_from(["lifeui", "services", "--category", "party"]).is_err());
    }
}
