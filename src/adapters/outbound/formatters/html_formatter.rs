use crate::adapters::outbound::formatters::html_tree::{Element, Node};
use crate::ports::outbound::PageFormatter;
use crate::shared::Result;
use crate::webindex::domain::{Distribution, PackageSummary, ReportMetadata};

/// Embedded stylesheet, carried over from the original page.
const CSS: &str = "
h1 {
  text-align: center;
  color: #a80030;
  text-decoration: underline;
}
h4 {
  text-align: center;
}
table {
  width: 100%;
  border: 1px solid #333;
  border-collapse: collapse;
}
th {
  background-color: #a80030;
  color: #FFF;
}
th.distribution {
  background-color: #880020;
}
td {
  vertical-align: top;
  border: 1px solid black;
  padding: 2px 5px;
  white-space: nowrap;
}
td.centered {
  text-align: center;
}
td.versions {
  white-space: normal;
}
.mono {
  font-family: monospace;
}
.footer {
  text-align: center;
  font-size: 80%;
}

/* Multi-dist support: try to align columns across tables */
.col1 { width: 15%; }
.col2 { width: 10%; }
.col3 { width:  5%; }
.col4 { width: 70%; }
";

/// HtmlFormatter adapter for rendering the index page
///
/// This adapter implements the PageFormatter port, emitting one
/// self-contained HTML document: a navigation header and one table per
/// distribution, built through the immutable element tree and serialized
/// in a single pass.
pub struct HtmlFormatter {
    css: String,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self {
            css: CSS.to_string(),
        }
    }

    /// Creates a formatter with a replacement stylesheet.
    pub fn with_css(css: String) -> Self {
        Self { css }
    }

    fn head(&self, metadata: &ReportMetadata) -> Element {
        Element::new("head")
            .child(Element::new("title").text(metadata.title()))
            .child(Element::new("style").raw(self.css.clone()))
    }

    /// The `<h4>` navigation line: in-page anchors per distribution plus
    /// direct links into the raw directory listings.
    fn navigation(&self, distributions: &[Distribution]) -> Element {
        let mut nav = Element::new("h4").text("Available distributions: ");

        for (i, dist) in distributions.iter().enumerate() {
            if i != 0 {
                nav = nav.text(" | ");
            }
            nav = nav.child(
                Element::new("a")
                    .attr("href", format!("#{}", dist.name))
                    .attr("class", "mono")
                    .text(dist.name.as_str()),
            );
        }

        nav.text(" — ")
            .text("direct access: ")
            .child(
                Element::new("a")
                    .attr("href", "dists/")
                    .attr("class", "mono")
                    .text("dists"),
            )
            .text(" | ")
            .child(
                Element::new("a")
                    .attr("href", "pool/")
                    .attr("class", "mono")
                    .text("pool"),
            )
    }

    fn distribution_table(&self, dist: &Distribution) -> Element {
        let title_row = Element::new("tr").attr("id", dist.name.clone()).child(
            Element::new("th")
                .attr("colspan", "4")
                .attr("class", "distribution")
                .text(format!("Distribution: {}", dist.name)),
        );

        let header_row = Element::new("tr")
            .child(Element::new("th").attr("class", "col1").raw("Package<br>name"))
            .child(Element::new("th").attr("class", "col2").raw("Newest<br>versions"))
            .child(Element::new("th").attr("class", "col3").raw("Newest<br>debs"))
            .child(Element::new("th").attr("class", "col4").raw("Older<br>versions"));

        Element::new("table")
            .child(title_row)
            .child(header_row)
            .children(dist.packages.iter().map(|s| Node::from(self.package_row(s))))
    }

    fn package_row(&self, summary: &PackageSummary) -> Element {
        let mut artifact_cell = Element::new("td").attr("class", "centered");
        for (i, artifact) in summary.newest_artifacts.iter().enumerate() {
            if i != 0 {
                artifact_cell = artifact_cell.text(" | ");
            }
            artifact_cell = artifact_cell.child(
                Element::new("a")
                    .attr("href", artifact.filename.clone())
                    .text(artifact.arch.as_str()),
            );
        }

        Element::new("tr")
            .child(
                Element::new("td").child(
                    Element::new("a")
                        .attr("href", summary.pool_dir.clone())
                        .text(summary.name.as_str()),
                ),
            )
            .child(
                Element::new("td")
                    .attr("class", "centered")
                    .text(summary.newest_version.as_str()),
            )
            .child(artifact_cell)
            .child(
                Element::new("td")
                    .attr("class", "versions")
                    .text(summary.older_versions.join(" | ")),
            )
    }

    fn footer(&self, metadata: &ReportMetadata) -> Element {
        Element::new("p").attr("class", "footer").text(format!(
            "Generated by {} {} at {}",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.generated_at()
        ))
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFormatter for HtmlFormatter {
    fn format(&self, distributions: &[Distribution], metadata: &ReportMetadata) -> Result<String> {
        let mut body = Element::new("body")
            .child(Element::new("h1").text(metadata.title()))
            .child(self.navigation(distributions));

        for dist in distributions {
            body = body
                .child(self.distribution_table(dist))
                .child(Element::new("br"));
        }

        body = body.child(self.footer(metadata));

        let document = Element::new("html")
            .child(self.head(metadata))
            .child(body);

        Ok(format!("<!DOCTYPE html>\n{}\n", document.to_html()))
    }
}
