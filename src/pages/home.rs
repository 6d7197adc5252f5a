use leptos::prelude::*;

use crate::components::graph_canvas::GraphSearchCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<GraphSearchCanvas />
				<div class="graph-overlay">
					<h1>"Graph Search Visualiser"</h1>
					<p class="subtitle">
						"Click to place nodes. Click two nodes to connect them. Set a target, then run BFS or DFS from node 1."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
