use crate::domain::ports::{AppEvent, EventSink, Notification, Notifier};

/// 將使用行為寫入 tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, event: AppEvent) {
        match event {
            AppEvent::ServiceViewed { service_id, title } => {
                tracing::info!(event = "service_view", %service_id, %title, "👀 Service viewed");
            }
            AppEvent::FormSubmitted { subject, is_urgent } => {
                tracing::info!(event = "form_submission", %subject, is_urgent, "📨 Contact form submitted");
            }
            AppEvent::EmergencyCall => {
                tracing::info!(event = "emergency_call", "🚨 Emergency call initiated");
            }
        }
    }
}

/// 沒有推播通道時，通知只記錄下來
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            title = %notification.title,
            body = %notification.body,
            delay_secs = notification.delay.as_secs(),
            "🔔 Local notification scheduled"
        );
    }
}
