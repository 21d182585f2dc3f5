//! minijinja templates for terminal output. Layout math (widths, truncation,
//! padding) happens in `render.rs`; templates only pick styles.

pub const LIST_TEMPLATE: &str = r#"{% for book in books %}  {{ book.id | style("id") }}{{ book.id_padding }}  {{ book.title | style("title") }}{{ book.padding }}  {% if book.author_known %}{{ book.author | style("author") }}{% else %}{{ book.author | style("muted") }}{% endif %}
{% endfor %}"#;

pub const LOAD_MORE_TEMPLATE: &str = r#"{% if enabled %}  {{ label | style("button") }}{% else %}  {{ label | style("button_disabled") }}{% endif %}
"#;

pub const DETAIL_TEMPLATE: &str = r#"
  {{ title | style("heading") }}
  {{ subtitle | style("author") }}
{% if genres %}  {{ genres | style("muted") }}
{% endif %}  {{ image | style("muted") }}

{% for line in description %}  {{ line }}
{% endfor %}"#;

pub const OPTIONS_TEMPLATE: &str = r#"{% for option in options %}  {{ option.value | style("id") }}{{ option.padding }}  {{ option.label }}
{% endfor %}"#;

pub const THEMES_TEMPLATE: &str = r#"{% for theme in themes %}{% if theme.active %}* {{ theme.name | style("active") }}{% else %}  {{ theme.name }}{% endif %}{{ theme.padding }}  --color-dark: {{ theme.dark }}  --color-light: {{ theme.light }}
{% endfor %}"#;

pub const SEARCH_FORM_TEMPLATE: &str = r#"
  {{ "Search" | style("heading") }}
  title:  {{ title }}
  author: {{ author }}
  genre:  {{ genre }}
  {{ "title <text> | author <id> | genre <id> | submit | cancel" | style("muted") }}
"#;

pub const SETTINGS_TEMPLATE: &str = r#"
  {{ "Settings" | style("heading") }}
  theme: {{ theme }}
  {{ "theme <name> | submit | cancel" | style("muted") }}
"#;

pub const CONFIG_TEMPLATE: &str = r#"page_size = {{ page_size }}
theme = {{ theme }}
dataset = {{ dataset }}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for message in messages %}{{ message.content | style(message.style) }}
{% endfor %}"#;

pub const HELP_TEMPLATE: &str = r#"{% for entry in entries %}  {{ entry.0 | style("id") }}{{ entry.1 }}  {{ entry.2 }}
{% endfor %}"#;

pub const TEMPLATES: &[(&str, &str)] = &[
    ("list", LIST_TEMPLATE),
    ("load_more", LOAD_MORE_TEMPLATE),
    ("detail", DETAIL_TEMPLATE),
    ("options", OPTIONS_TEMPLATE),
    ("themes", THEMES_TEMPLATE),
    ("search_form", SEARCH_FORM_TEMPLATE),
    ("settings", SETTINGS_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
    ("help", HELP_TEMPLATE),
];
