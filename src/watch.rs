use std::sync::mpsc::Receiver;

use notify::{Event, EventKind};
use tracing::warn;

/// A modification event counts when any of its paths ends with the target
/// filename. This is a plain suffix match, so `mydata.csv` also counts;
/// creations, removals, and changes to other files never do.
pub fn is_target_change(event: &Event, target: &str) -> bool {
  matches!(event.kind, EventKind::Modify(_))
    && event.paths.iter().any(|path| path.to_string_lossy().ends_with(target))
}

/// Drains the event channel, invoking `on_change` once per qualifying event,
/// in arrival order. The handler runs synchronously inside the loop, so a
/// slow handler delays later events rather than overlapping with them;
/// nothing is debounced or coalesced. Returns once the channel disconnects,
/// i.e. when the watcher on the sending side is dropped.
pub fn dispatch<F: FnMut()>(rx: &Receiver<notify::Result<Event>>, target: &str, mut on_change: F) {
  for result in rx.iter() {
    match result {
      Ok(event) if is_target_change(&event, target) => on_change(),
      Ok(_) => {}
      Err(err) => warn!("watch error: {err}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{path::Path, sync::mpsc};

  use notify::event::{CreateKind, DataChange, ModifyKind};

  use super::*;

  fn modified(path: &str) -> Event {
    Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
      .add_path(Path::new(path).to_path_buf())
  }

  #[test]
  fn filters_on_path_suffix() {
    assert!(is_target_change(&modified("./data.csv"), "data.csv"));
    assert!(is_target_change(&modified("/some/dir/data.csv"), "data.csv"));
    // Suffix semantics: any filename ending in the target counts.
    assert!(is_target_change(&modified("./mydata.csv"), "data.csv"));
    assert!(is_target_change(&modified("./old_data.csv"), "data.csv"));
    assert!(!is_target_change(&modified("./other.txt"), "data.csv"));
    assert!(!is_target_change(&modified("./data.csv.bak"), "data.csv"));
  }

  #[test]
  fn only_modifications_count() {
    let created =
      Event::new(EventKind::Create(CreateKind::File)).add_path(Path::new("data.csv").to_path_buf());
    assert!(!is_target_change(&created, "data.csv"));
  }

  #[test]
  fn dispatch_fires_once_per_matching_event() {
    let (tx, rx) = mpsc::channel();
    tx.send(Ok(modified("./data.csv"))).unwrap();
    tx.send(Ok(modified("./other.txt"))).unwrap();
    tx.send(Ok(modified("./data.csv"))).unwrap();
    drop(tx);

    let mut calls = 0;
    dispatch(&rx, "data.csv", || calls += 1);
    assert_eq!(calls, 2);
  }

  #[test]
  fn dispatch_skips_watch_errors() {
    let (tx, rx) = mpsc::channel();
    tx.send(Err(notify::Error::generic("backend hiccup"))).unwrap();
    tx.send(Ok(modified("data.csv"))).unwrap();
    drop(tx);

    let mut calls = 0;
    dispatch(&rx, "data.csv", || calls += 1);
    assert_eq!(calls, 1);
  }
}
