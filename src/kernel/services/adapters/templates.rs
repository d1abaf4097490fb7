//! Starter files for new projects.

use serde::{Deserialize, Serialize};

use crate::models::{NewFileRecord, ProjectId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemplateKind {
    #[serde(rename = "nextjs")]
    NextJs,
    #[serde(rename = "vite-vue")]
    ViteVue,
    #[default]
    #[serde(rename = "static")]
    Static,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::NextJs, Self::ViteVue, Self::Static];

    /// Unknown names fall back to the static template.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "nextjs" | "next" | "next.js" => Self::NextJs,
            "vite-vue" | "vite" | "vue" => Self::ViteVue,
            _ => Self::Static,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NextJs => "nextjs",
            Self::ViteVue => "vite-vue",
            Self::Static => "static",
        }
    }
}

struct TemplateEntry {
    parent: &'static str,
    name: &'static str,
    is_folder: bool,
    content: &'static str,
}

const fn folder(name: &'static str) -> TemplateEntry {
    TemplateEntry {
        parent: "",
        name,
        is_folder: true,
        content: "",
    }
}

const fn file(parent: &'static str, name: &'static str, content: &'static str) -> TemplateEntry {
    TemplateEntry {
        parent,
        name,
        is_folder: false,
        content,
    }
}

/// Records for a fresh project, folders before the files inside them.
pub fn template_files(kind: TemplateKind, project: &ProjectId) -> Vec<NewFileRecord> {
    entries(kind)
        .iter()
        .map(|e| NewFileRecord::under(project.clone(), e.parent, e.name, e.is_folder, e.content))
        .collect()
}

fn entries(kind: TemplateKind) -> &'static [TemplateEntry] {
    match kind {
        TemplateKind::NextJs => NEXTJS,
        TemplateKind::ViteVue => VITE_VUE,
        TemplateKind::Static => STATIC,
    }
}

const NEXTJS: &[TemplateEntry] = &[
    folder("pages"),
    file("pages", "index.js", NEXTJS_INDEX),
    folder("styles"),
    file("styles", "globals.css", NEXTJS_GLOBALS),
    file("", "package.json", NEXTJS_PACKAGE),
];

const VITE_VUE: &[TemplateEntry] = &[
    folder("src"),
    file("src", "App.vue", VUE_APP),
    file("src", "main.js", VUE_MAIN),
    file("", "index.html", VUE_INDEX),
    file("", "package.json", VUE_PACKAGE),
    file("", "vite.config.js", VUE_CONFIG),
];

const STATIC: &[TemplateEntry] = &[
    file("", "index.html", STATIC_INDEX),
    file("", "styles.css", STATIC_STYLES),
    file("", "script.js", STATIC_SCRIPT),
];

const NEXTJS_INDEX: &str = r#"export default function Home() {
  return (
    <main style={{ fontFamily: 'system-ui, sans-serif', padding: '2rem' }}>
      <h1>Welcome to Next.js!</h1>
      <p>Edit <code>pages/index.js</code> to get started.</p>
    </main>
  );
}
"#;

const NEXTJS_GLOBALS: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html,
body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  background: #fafafa;
  color: #333;
}
"#;

const NEXTJS_PACKAGE: &str = r#"{
  "name": "my-nextjs-app",
  "version": "1.0.0",
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start"
  },
  "dependencies": {
    "next": "^14.0.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  }
}
"#;

const VUE_APP: &str = r#"<template>
  <div class="app">
    <h1>{{ message }}</h1>
    <button @click="count++">Count: {{ count }}</button>
  </div>
</template>

<script setup>
import { ref } from 'vue'

const message = ref('Welcome to Vue + Vite!')
const count = ref(0)
</script>

<style scoped>
.app {
  font-family: system-ui, sans-serif;
  text-align: center;
  padding: 2rem;
}
</style>
"#;

const VUE_MAIN: &str = r#"import { createApp } from 'vue'
import App from './App.vue'

createApp(App).mount('#app')
"#;

const VUE_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Vite + Vue App</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.js"></script>
  </body>
</html>
"#;

const VUE_PACKAGE: &str = r#"{
  "name": "my-vite-vue-app",
  "version": "1.0.0",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "vue": "^3.4.0"
  },
  "devDependencies": {
    "@vitejs/plugin-vue": "^5.0.0",
    "vite": "^5.0.0"
  }
}
"#;

const VUE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import vue from '@vitejs/plugin-vue'

export default defineConfig({
  plugins: [vue()]
})
"#;

const STATIC_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>My Website</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <header>
    <h1>My Website</h1>
  </header>
  <main>
    <section class="hero">
      <h2>Welcome!</h2>
      <p>This is a simple static website.</p>
      <button id="cta-button">Get Started</button>
    </section>
  </main>
  <script src="script.js"></script>
</body>
</html>
"#;

const STATIC_STYLES: &str = r#"* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  line-height: 1.6;
  color: #333;
  background: #fafafa;
}

header {
  background: #2563eb;
  color: white;
  padding: 1rem 2rem;
}

.hero {
  text-align: center;
  padding: 4rem 0;
}
"#;

const STATIC_SCRIPT: &str = r#"document.addEventListener('DOMContentLoaded', function () {
  const button = document.getElementById('cta-button');
  if (button) {
    button.addEventListener('click', function () {
      alert('Thanks for clicking!');
    });
  }
});
"#;

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/templates.rs"]
mod tests;
