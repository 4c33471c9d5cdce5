use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Footer, Nav};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/vogue_perfum.css"/>
        <Title text="Vogue Perfum - Signature Fragrances"/>
        <Meta name="description" content="Vogue Perfum: signature fragrances from Paris, Tokyo and New York"/>

        <Router>
            <div class="page">
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <h1 class="not-found">"404 - Page Not Found"</h1> }>
                        <Route path=path!("/") view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
