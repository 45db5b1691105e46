//! Assembly and rendering of the generated realm table.
//!
//! The rendered text is a Lua chunk for the GRM addon: a `Realms` table
//! filled lazily by `InitializeRealms`, one `GRM.GameVersion()` branch per
//! namespace, and the `GRM.GetRealmNames` accessor.

use crate::aggregate::{build_for_region, RegionRealms, RunContext};
use crate::catalog::{Namespace, Region};
use crate::client::RealmSource;
use crate::error::RealmError;
use serde_json::{json, Map, Value};
use std::fmt::Write as _;

const INDENT: &str = "    ";

/// Realm lists of one namespace, in region order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSection {
    pub namespace: Namespace,
    pub regions: Vec<(Region, RegionRealms)>,
}

/// The full namespace -> region -> locale -> names structure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportDocument {
    pub sections: Vec<NamespaceSection>,
}

impl ExportDocument {
    /// Total realm names across the document
    pub fn total_names(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.regions.iter())
            .map(|(_, realms)| realms.total_names())
            .sum()
    }

    pub fn section(&self, namespace: Namespace) -> Option<&NamespaceSection> {
        self.sections.iter().find(|s| s.namespace == namespace)
    }

    pub fn region(&self, namespace: Namespace, region: Region) -> Option<&RegionRealms> {
        self.section(namespace)?
            .regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, realms)| realms)
    }

    /// Render the Lua chunk (without the file header)
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("\nlocal Realms = {};\n");
        out.push_str("local initialized = false\n\n");
        out.push_str("\n-- Only Initialize if ever needed. No need to pull into memory otherwise.");
        out.push_str("\nlocal InitializeRealms = function()\n");
        let _ = writeln!(out, "{INDENT}initialized = true\n");

        for (k, section) in self.sections.iter().enumerate() {
            let modifier = if k > 0 { "else" } else { "" };
            let _ = writeln!(
                out,
                "{INDENT}{modifier}if GRM.GameVersion() == \"{}\" then\n",
                section.namespace.game_version()
            );
            render_section(&mut out, section);
        }
        if !self.sections.is_empty() {
            let _ = writeln!(out, "{INDENT}end\n");
        }
        out.push_str("end\n\n");

        render_accessor(&mut out);
        out
    }

    /// Same data as nested JSON objects, names unquoted
    pub fn to_json(&self) -> Value {
        let mut namespaces = Map::new();
        for section in &self.sections {
            let mut regions = Map::new();
            for (region, realms) in &section.regions {
                let mut locales = Map::new();
                for (locale, names) in realms.iter() {
                    locales.insert(locale.key(), serde_json::to_value(names).unwrap_or_default());
                }
                regions.insert(region.code().to_string(), Value::Object(locales));
            }
            namespaces.insert(
                section.namespace.to_string(),
                json!({
                    "game_version": section.namespace.game_version(),
                    "namespace_prefix": section.namespace.prefix(),
                    "regions": regions,
                }),
            );
        }
        Value::Object(namespaces)
    }
}

fn render_section(out: &mut String, section: &NamespaceSection) {
    let body = INDENT.repeat(2);
    let names_indent = INDENT.repeat(3);

    for (region, realms) in &section.regions {
        let code = region.code();
        let _ = writeln!(out, "{body}Realms.{code} = {{}}");
        for (locale, names) in realms.iter() {
            let joined = names
                .iter()
                .map(|n| n.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{body}Realms.{code}.{} = {{\n{names_indent}{joined}\n{body}}}",
                locale.key()
            );
        }
    }
}

fn render_accessor(out: &mut String) {
    out.push_str("-- Get List of all Realm Names\n");
    out.push_str("GRM.GetRealmNames = function()\n");
    let _ = writeln!(out, "{INDENT}if not initialized then");
    let _ = writeln!(out, "{INDENT}{INDENT}InitializeRealms()");
    let _ = writeln!(out, "{INDENT}end\n");
    let _ = writeln!(out, "{INDENT}local region = string.lower(GetCurrentRegionName())");

    for region in Region::ALL {
        let alias = region.lookup_alias();
        if alias != region {
            let _ = writeln!(out, "{INDENT}if region == \"{}\" then", region.code());
            let _ = writeln!(out, "{INDENT}{INDENT}region = \"{}\"", alias.code());
            let _ = writeln!(out, "{INDENT}end");
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{INDENT}return Realms[region][GetLocale()]");
    out.push_str("end");
}

/// Drives the locale aggregator over every namespace and region
pub struct ExportBuilder<'a, S: RealmSource + ?Sized> {
    source: &'a S,
    namespaces: Vec<Namespace>,
    regions: Vec<Region>,
}

impl<'a, S: RealmSource + ?Sized> ExportBuilder<'a, S> {
    /// Builder over all namespaces and exported regions
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            namespaces: Namespace::ALL.to_vec(),
            regions: Region::EXPORTED.to_vec(),
        }
    }

    /// Restrict to these namespaces; export order stays fixed
    pub fn namespaces(mut self, namespaces: &[Namespace]) -> Self {
        self.namespaces = Namespace::ALL
            .into_iter()
            .filter(|n| namespaces.contains(n))
            .collect();
        self
    }

    /// Restrict to these regions; export order stays fixed
    pub fn regions(mut self, regions: &[Region]) -> Self {
        self.regions = Region::ALL
            .into_iter()
            .filter(|r| regions.contains(r))
            .collect();
        self
    }

    /// Fetch everything and assemble the document
    pub fn build(&self, ctx: &mut RunContext) -> Result<ExportDocument, RealmError> {
        let mut sections = Vec::with_capacity(self.namespaces.len());

        for &namespace in &self.namespaces {
            tracing::info!("Next namespace: {}", namespace.game_version());
            let mut regions = Vec::with_capacity(self.regions.len());

            for &region in &self.regions {
                tracing::info!("Region: {}", region);
                let realms = build_for_region(ctx, self.source, region, namespace)?;
                regions.push((region, realms));
            }

            sections.push(NamespaceSection { namespace, regions });
        }

        Ok(ExportDocument { sections })
    }
}
