/// A recognized route export: its type constraint in the generated-type
/// namespace, hover documentation, and a completion snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportContract {
    /// The export name as written in a route module.
    pub export_name: &'static str,
    /// Member of the generated-type namespace the export must satisfy.
    pub constraint: &'static str,
    /// Documentation appended to hover results.
    pub documentation: &'static str,
    /// Snippet offered when completing at the top level of a route module.
    pub completion_template: &'static str,
}

/// The fixed, process-wide export contract table. Read-only after startup;
/// unknown export names simply have no entry and are left unannotated.
pub fn contracts() -> &'static [ExportContract] {
    CONTRACTS
}

/// Look up a contract by export name.
pub fn contract_for(export_name: &str) -> Option<&'static ExportContract> {
    CONTRACTS.iter().find(|c| c.export_name == export_name)
}

// `default` is not a usable member name, so its constraint is `_default`.
const CONTRACTS: &[ExportContract] = &[
    ExportContract {
        export_name: "default",
        constraint: "_default",
        documentation: "Route module `default` export.\n\nThe component rendered when the route matches.",
        completion_template: "export default function Component() {\n  return null\n}\n",
    },
    ExportContract {
        export_name: "links",
        constraint: "links",
        documentation: "Route module `links` export.\n\nDescribes `<link>` elements to add to the document for this route.",
        completion_template: "export const links = () => []\n",
    },
    ExportContract {
        export_name: "serverLoader",
        constraint: "serverLoader",
        documentation: "Route module `serverLoader` export.\n\nLoads data on the server before the route renders.",
        completion_template: "export async function serverLoader() {\n  return null\n}\n",
    },
    ExportContract {
        export_name: "clientLoader",
        constraint: "clientLoader",
        documentation: "Route module `clientLoader` export.\n\nLoads data in the browser before the route renders.",
        completion_template: "export async function clientLoader() {\n  return null\n}\n",
    },
    ExportContract {
        export_name: "HydrateFallback",
        constraint: "HydrateFallback",
        documentation: "Route module `HydrateFallback` export.\n\nThe component rendered while the client loader hydrates.",
        completion_template: "export function HydrateFallback() {\n  return null\n}\n",
    },
    ExportContract {
        export_name: "serverAction",
        constraint: "serverAction",
        documentation: "Route module `serverAction` export.\n\nHandles mutations on the server.",
        completion_template: "export async function serverAction() {\n  return null\n}\n",
    },
    ExportContract {
        export_name: "clientAction",
        constraint: "clientAction",
        documentation: "Route module `clientAction` export.\n\nHandles mutations in the browser.",
        completion_template: "export async function clientAction() {\n  return null\n}\n",
    },
    ExportContract {
        export_name: "ErrorBoundary",
        constraint: "ErrorBoundary",
        documentation: "Route module `ErrorBoundary` export.\n\nThe component rendered when the route throws.",
        completion_template: "export function ErrorBoundary() {\n  return null\n}\n",
    },
];
