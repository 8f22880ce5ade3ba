//! Prerenders the portfolio page at rest into a standalone HTML document.
//!
//! Usage: `folio-static [OUTPUT]` (stdout when no path is given).

use folio_core::constants::PAGE_TITLE;
use folio_core::{html, ContentModel, MoveHandler, PageComposer, PointerSource, RenderHost, VisualNode};
use std::io::Write;

/// Render host that serializes the active tree to an HTML document.
#[derive(Default)]
struct StringHost {
    document: Option<String>,
}

impl RenderHost for StringHost {
    fn mount(&mut self, tree: &VisualNode) -> anyhow::Result<()> {
        self.document = Some(html::document(PAGE_TITLE, tree));
        Ok(())
    }

    fn update(&mut self, tree: &VisualNode) -> anyhow::Result<()> {
        self.mount(tree)
    }

    fn unmount(&mut self) {
        self.document = None;
    }
}

/// A pointer that never moves; the snapshot is taken at offset (0, 0).
struct StillPointer;

impl PointerSource for StillPointer {
    type Listener = ();

    fn on_move(&self, _handler: MoveHandler) -> anyhow::Result<()> {
        Ok(())
    }
}

fn render() -> anyhow::Result<String> {
    let page = PageComposer::new(ContentModel::portfolio(), StringHost::default()).mount(&StillPointer)?;
    let doc = page
        .with_host(|h| h.document.clone())
        .ok_or_else(|| anyhow::anyhow!("host holds no document after mount"))?;
    page.unmount();
    Ok(doc)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let doc = render()?;
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, &doc)?;
            log::info!("wrote {} bytes to {}", doc.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(doc.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
