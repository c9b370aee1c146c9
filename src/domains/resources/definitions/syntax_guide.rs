//! Harness markup quick reference.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct SyntaxGuideResource;

const GUIDE: &str = r#"# WireViz harness markup

A harness description has three top-level sections. Designators (`X1`, `W1`)
are chosen by you and must be unique; nothing is checked until WireViz renders.

```yaml
connectors:
  X1:
    type: Molex KK 254
    subtype: female
    pinlabels: [GND, VCC, RX, TX]
  X2:
    pincount: 4

cables:
  W1:
    wirecount: 4
    length: 1
    gauge: 0.25 mm2
    colors: [BK, RD, GN, YE]
    shield: true

connections:
  -
    - X1: [1-4]
    - W1: [1-4]
    - X2: [1, 2, 4, 3]
```

- Each connection set lists endpoints in order; pins and wires line up by position.
- Ranges like `1-4` expand to consecutive pins or wires.
- YAML anchors (`&name`) and aliases (`*name`) work for templates.
- Optional sections: `options` (e.g. `bgcolor`, `fontname`) and `metadata` (e.g. `title`).

Tools: build the YAML with `wireviz_create_yaml`, then pass it to
`wireviz_render_image`, `wireviz_bom`, `wireviz_save_png` or `wireviz_save_pdf`.
"#;

impl ResourceDefinition for SyntaxGuideResource {
    const URI: &'static str = "wireviz://docs/syntax";
    const NAME: &'static str = "WireViz Markup Reference";
    const DESCRIPTION: &'static str =
        "Quick reference for the connectors/cables/connections markup the WireViz tools accept";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(GUIDE)
    }
}
