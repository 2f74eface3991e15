//! Writes the reduced network: the flagged nodes and edges in the same
//! cytoscape.js layout the network description uses.

use pathmark_config::SubsetConfig;
use pathmark_core::{Edge, FileRole, Node, PathmarkError, RecordStore, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn write_preamble<W: Write>(out: &mut W, config: &SubsetConfig) -> io::Result<()> {
    writeln!(out, "{{")?;
    writeln!(out, "  \"format_version\" : \"{}\",", config.format_version)?;
    writeln!(out, "  \"generated_by\" : \"{}\",", config.generated_by)?;
    writeln!(
        out,
        "  \"target_cytoscapejs_version\" : \"{}\",",
        config.target_cytoscapejs_version
    )?;
    writeln!(out, "  \"data\" : {{")?;
    writeln!(out, "    \"shared_name\" : \"{}\",", config.network_name)?;
    writeln!(out, "    \"name\" : \"{}\",", config.network_name)?;
    writeln!(out, "    \"SUID\" : {},", config.network_suid)?;
    writeln!(out, "    \"__Annotations\" : [ \"\" ],")?;
    writeln!(out, "    \"selected\" : true")?;
    writeln!(out, "  }},")?;
    writeln!(out, "  \"elements\" : {{")
}

fn write_node<W: Write>(out: &mut W, node: &Node) -> io::Result<()> {
    writeln!(out, "      \"data\" : {{")?;
    writeln!(out, "        \"id\" : \"{}\",", node.id)?;
    writeln!(out, "        \"shared_name\" : \"{}\",", node.shared_name)?;
    writeln!(out, "        \"isExcludedFromPaths\" : {},", flag(node.excluded_from_paths))?;
    writeln!(out, "        \"name\" : \"{}\",", node.name)?;
    writeln!(out, "        \"isInPath\" : {},", flag(node.in_path))?;
    writeln!(out, "        \"FoldChange\" : {:.6},", node.fold_change)?;
    writeln!(out, "        \"SUID\" : {},", node.suid)?;
    writeln!(out, "        \"Layer\" : \"{}\",", node.layer)?;
    writeln!(out, "        \"Prize\" : {},", node.prize)?;
    writeln!(out, "        \"selected\" : {}", flag(node.selected))?;
    writeln!(out, "      }},")?;
    writeln!(out, "      \"position\" : {{")?;
    writeln!(out, "        \"x\" : {:.6},", node.position.x)?;
    writeln!(out, "        \"y\" : {:.6}", node.position.y)?;
    writeln!(out, "      }},")?;
    writeln!(out, "      \"selected\" : {}", flag(node.selected))
}

fn write_edge<W: Write>(out: &mut W, edge: &Edge) -> io::Result<()> {
    writeln!(out, "      \"data\" : {{")?;
    writeln!(out, "        \"id\" : \"{}\",", edge.id)?;
    writeln!(out, "        \"source\" : \"{}\",", edge.source)?;
    writeln!(out, "        \"target\" : \"{}\",", edge.target)?;
    writeln!(out, "        \"shared_name\" : \"{}\",", edge.shared_name)?;
    writeln!(out, "        \"sh_interaction\" : \"{}\",", edge.shared_interaction)?;
    writeln!(out, "        \"name\" : \"{}\",", edge.name)?;
    writeln!(out, "        \"interaction\" : \"{}\",", edge.interaction)?;
    writeln!(out, "        \"isInPath\" : {},", flag(edge.in_path))?;
    writeln!(out, "        \"SUID\" : {},", edge.suid)?;
    writeln!(out, "        \"Time\" : \"{}\",", edge.time)?;
    writeln!(out, "        \"selected\" : {}", flag(edge.selected))?;
    writeln!(out, "      }},")?;
    writeln!(out, "      \"selected\" : {}", flag(edge.selected))
}

/// Write `"<key>" : [ {...}, {...} ]` for the given records.
///
/// An empty selection renders as `[ ]` so the document stays well formed.
fn write_list<W, T, F>(
    out: &mut W,
    key: &str,
    records: impl Iterator<Item = T>,
    trailer: &str,
    mut write_record: F,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, T) -> io::Result<()>,
{
    let mut records = records.peekable();
    if records.peek().is_none() {
        return writeln!(out, "    \"{}\" : [ ]{}", key, trailer);
    }

    writeln!(out, "    \"{}\" : [ {{", key)?;
    let mut first = true;
    for record in records {
        if !first {
            writeln!(out, "    }}, {{")?;
        }
        write_record(out, record)?;
        first = false;
    }
    writeln!(out, "    }} ]{}", trailer)
}

/// Render the flagged records of `store` as a network description.
pub fn write_subset<W: Write>(out: &mut W, store: &RecordStore, config: &SubsetConfig) -> io::Result<()> {
    write_preamble(out, config)?;
    write_list(out, "nodes", store.flagged_nodes(), ",", write_node)?;
    write_list(out, "edges", store.flagged_edges(), "", write_edge)?;
    writeln!(out, "  }}")?;
    writeln!(out, "}}")
}

/// Write the reduced network to `path`, replacing any previous file.
///
/// The content is staged in a temporary file beside `path` and renamed into
/// place, so a failed write never leaves a truncated network behind.
pub fn save_subset(path: &Path, store: &RecordStore, config: &SubsetConfig) -> Result<()> {
    let sink_error = |source: io::Error| PathmarkError::Sink {
        role: FileRole::Subset,
        path: path.to_path_buf(),
        source,
    };

    info!("writing out network subset to '{}'", path.display());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(sink_error)?;

    {
        let mut out = BufWriter::new(staged.as_file_mut());
        write_subset(&mut out, store, config).map_err(sink_error)?;
        out.flush().map_err(sink_error)?;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(sink_error)?;
    }
    staged.as_file().sync_all().map_err(sink_error)?;

    // Dropping the temp file on any error above removes it.
    staged.persist(path).map_err(|e| sink_error(e.error))?;
    Ok(())
}
