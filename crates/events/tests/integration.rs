//! Integration tests for events

#[cfg(test)]
mod tests {
    use onefile_events::*;

    #[tokio::test]
    async fn test_event_emitter_helpers() {
        let (tx, mut rx) = channel();

        tx.emit_debug("test debug");
        tx.emit_warning("test warning");

        let event1 = rx.recv().await.unwrap();
        assert!(matches!(
            event1,
            AppEvent::General(GeneralEvent::DebugLog { .. })
        ));

        let event2 = rx.recv().await.unwrap();
        assert!(matches!(
            event2,
            AppEvent::General(GeneralEvent::Warning { .. })
        ));
    }

    #[tokio::test]
    async fn test_phase_events_arrive_in_order() {
        let (tx, mut rx) = channel();

        tx.emit(AppEvent::Environment(EnvironmentEvent::Creating {
            interpreter: "python3.11".into(),
            path: "venv".into(),
        }));
        tx.emit(AppEvent::Install(InstallEvent::Started {
            packages: vec!["PySide6".into()],
        }));
        tx.emit(AppEvent::Package(PackageEvent::Started {
            artifact: "ProjectPlus-Updater-v3.4".into(),
        }));

        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Environment(EnvironmentEvent::Creating { .. })
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Install(InstallEvent::Started { .. })
        ));
        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Package(PackageEvent::Started { .. })
        ));
    }

    #[tokio::test]
    async fn test_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);

        // Should not panic when receiver is dropped
        tx.emit_warning("ignored");
    }
}
