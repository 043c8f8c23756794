use lifeui_core::adapters::JsonFileCatalog;
use lifeui_core::domain::ports::{InquiryGateway, LocalStore};
use lifeui_core::{AppState, Catalog, ContactSubject, Inquiry, JsonFileStore, Result};
use std::fs;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

struct OfflineGateway;

#[async_trait::async_trait]
impl InquiryGateway for OfflineGateway {
    async fn submit(&self, _inquiry: &Inquiry) -> Result<()> {
        Ok(())
    }
}

#[test]
fn test_draft_survives_process_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");

    let mut state = AppState::new(OfflineGateway, JsonFileStore::new(&path));
    {
        let form = state.contact_form_mut();
        form.name = "黃太太".to_string();
        form.subject = ContactSubject::Appointment;
        form.is_urgent = true;
    }
    state.save_draft();
    assert!(state.persistence_warning().is_none());

    // 新的狀態從同一個檔案還原
    let mut reopened = AppState::new(OfflineGateway, JsonFileStore::new(&path));
    assert!(reopened.restore_draft());
    assert_eq!(reopened.contact_form().name, "黃太太");
    assert_eq!(reopened.contact_form().subject, ContactSubject::Appointment);
    assert!(reopened.contact_form().is_urgent);

    reopened.clear_draft();
    let store = JsonFileStore::new(&path);
    assert!(assert_ok!(store.load_draft()).is_none());
}

#[test]
fn test_document_uses_well_known_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    let store = JsonFileStore::new(&path);

    assert_ok!(store.save_favorites(&["farewell-ceremony".to_string()]));
    assert_ok!(store.save_draft(&lifeui_core::ContactForm::default()));

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        document["favoriteServices"],
        serde_json::json!(["farewell-ceremony"])
    );
    assert_eq!(document["contactFormDraft"]["agreedToTerms"], false);
    assert_eq!(document["contactFormDraft"]["preferredContactTime"], "anytime");
}

#[test]
fn test_corrupt_store_surfaces_warning() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    assert_err!(store.load_favorites());

    let mut state = AppState::new(OfflineGateway, JsonFileStore::new(&path));
    assert!(state.favorites().is_empty());
    assert!(state.persistence_warning().is_some());

    // 下一次儲存會重寫檔案，之後即可正常讀回
    state.add_favorite("family-support");
    assert!(state.is_favorite("family-support"));

    let reopened = AppState::new(OfflineGateway, JsonFileStore::new(&path));
    assert!(reopened.persistence_warning().is_none());
    assert!(reopened.is_favorite("family-support"));
}

#[tokio::test]
async fn test_state_loads_catalog_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("catalog.json");
    let mut catalog = Catalog::sample();
    catalog.services.truncate(2);
    fs::write(&catalog_path, serde_json::to_string(&catalog).unwrap()).unwrap();

    let mut state = AppState::new(OfflineGateway, JsonFileStore::new(temp_dir.path().join("s.json")))
        .with_catalog_source(JsonFileCatalog::new(&catalog_path));
    assert_ok!(state.load_catalog().await);

    assert_eq!(state.services().len(), 2);
    assert_eq!(state.packages().len(), 3);
}
