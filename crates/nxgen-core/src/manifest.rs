//! Static template manifests.
//!
//! A manifest maps files under a template set directory to destination paths
//! inside the generated project. Destinations may contain `{field}` tokens
//! resolved from the answers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Rendered through Tera with the answers as context.
    Render,
    /// Copied byte for byte.
    Copy,
    /// Created as an empty directory. The source is unused.
    Directory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub source: &'static str,
    pub destination: &'static str,
    pub kind: EntryKind,
}

const fn render(source: &'static str, destination: &'static str) -> ManifestEntry {
    ManifestEntry {
        source,
        destination,
        kind: EntryKind::Render,
    }
}

const fn copy(source: &'static str, destination: &'static str) -> ManifestEntry {
    ManifestEntry {
        source,
        destination,
        kind: EntryKind::Copy,
    }
}

const fn dir(destination: &'static str) -> ManifestEntry {
    ManifestEntry {
        source: "",
        destination,
        kind: EntryKind::Directory,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateManifest {
    /// Directory under the template root holding this set's sources.
    pub root: &'static str,
    /// Destination of the project directory itself.
    pub project_root: &'static str,
    pub entries: &'static [ManifestEntry],
}

/// Next.js + Prisma + MySQL application.
pub static NEXTJS_PRISMA: TemplateManifest = TemplateManifest {
    root: "nextjs-prisma",
    project_root: "{name}",
    entries: &[
        render("components/Meta.tsx.tera", "{name}/components/Meta.tsx"),
        render("components/Footer.tsx.tera", "{name}/components/Footer.tsx"),
        render("cypress/e2e/home.cy.js.tera", "{name}/cypress/e2e/home.cy.js"),
        copy("cypress/fixtures/example.json", "{name}/cypress/fixtures/example.json"),
        copy("cypress/support/commands.ts", "{name}/cypress/support/commands.ts"),
        copy("cypress/support/e2e.ts", "{name}/cypress/support/e2e.ts"),
        copy("database/items.ts", "{name}/database/items.ts"),
        dir("{name}/fonts/Lora"),
        dir("{name}/fonts/Roboto"),
        render("lib/constants.ts.tera", "{name}/lib/constants.ts"),
        copy("lib/prisma.ts", "{name}/lib/prisma.ts"),
        copy("pages/_app.tsx", "{name}/pages/_app.tsx"),
        copy("pages/_document.tsx", "{name}/pages/_document.tsx"),
        copy("pages/index.tsx", "{name}/pages/index.tsx"),
        copy("prisma/data/index.ts", "{name}/prisma/data/index.ts"),
        copy("prisma/data/items.ts", "{name}/prisma/data/items.ts"),
        dir("{name}/prisma/migrations"),
        copy("prisma/schema.prisma", "{name}/prisma/schema.prisma"),
        copy("prisma/seed.ts", "{name}/prisma/seed.ts"),
        dir("{name}/public"),
        render("scripts/connect-to-mysql.sh.tera", "{name}/scripts/connect-to-mysql.sh"),
        copy("scripts/create-migration.sh", "{name}/scripts/create-migration.sh"),
        render("scripts/local-db.sh.tera", "{name}/scripts/local-db.sh"),
        render("scripts/nuke.sh.tera", "{name}/scripts/nuke.sh"),
        render("scripts/test-db.sh.tera", "{name}/scripts/test-db.sh"),
        copy("styles/globals.css", "{name}/styles/globals.css"),
        copy("babelrc", "{name}/.babelrc"),
        render("env.tera", "{name}/.env"),
        copy("eslintrc.json", "{name}/.eslintrc.json"),
        copy("gitignore", "{name}/.gitignore"),
        copy("prettierignore", "{name}/.prettierignore"),
        copy("all-tests.sh", "{name}/all-tests.sh"),
        copy("amplify.yml", "{name}/amplify.yml"),
        copy("ci.sh", "{name}/ci.sh"),
        copy("create-migrations.md", "{name}/create-migrations.md"),
        copy("cypress.config.ts", "{name}/cypress.config.ts"),
        render("docker-compose.test.yml.tera", "{name}/docker-compose.test.yml"),
        render("docker-compose.yml.tera", "{name}/docker-compose.yml"),
        copy("local-start.sh", "{name}/local-start.sh"),
        copy("next.config.js", "{name}/next.config.js"),
        render("package.json.tera", "{name}/package.json"),
        copy("postcss.config.js", "{name}/postcss.config.js"),
        copy("prettier.config.js", "{name}/prettier.config.js"),
        render("README.md.tera", "{name}/README.md"),
        copy("tailwind.config.js", "{name}/tailwind.config.js"),
        copy("tsconfig.json", "{name}/tsconfig.json"),
        copy("yarn.lock", "{name}/yarn.lock"),
    ],
};

impl TemplateManifest {
    /// Sources this manifest reads, in manifest order.
    pub fn sources(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.kind != EntryKind::Directory)
            .map(|entry| entry.source)
    }
}
