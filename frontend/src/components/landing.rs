use crate::components::icons::{ScanFace, Search, ShieldAlert, ShieldCheck};
use crate::web::router::Link;
use leptos::prelude::*;
use truthlens::route::AppRoute;

/// 功能介绍卡片
#[component]
fn FeatureCard(title: &'static str, desc: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="text-primary">{children()}</div>
                <h3 class="card-title">{title}</h3>
                <p class="text-base-content/70">{desc}</p>
            </div>
        </div>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow px-6">
                <div class="flex-1 gap-2">
                    <ShieldCheck attr:class="h-6 w-6 text-primary" />
                    <span class="text-xl font-bold">"TruthLens"</span>
                </div>
                <div class="flex-none gap-2">
                    <Link to=AppRoute::Login class="btn btn-ghost">"Sign In"</Link>
                    <Link to=AppRoute::Signup class="btn btn-primary">"Launch Platform"</Link>
                </div>
            </div>

            <div class="hero py-24">
                <div class="hero-content text-center">
                    <div class="max-w-2xl space-y-6">
                        <div class="badge badge-primary badge-outline">
                            "AI-Powered Disinformation Defense System"
                        </div>
                        <h1 class="text-5xl font-bold">
                            "Detect the Fake." <br />
                            <span class="text-primary">"Verify the Real."</span>
                        </h1>
                        <p class="text-lg text-base-content/70">
                            "Neural analysis of text, links, documents and media to protect against psychological operations and deepfakes."
                        </p>
                        <Link to=AppRoute::Login class="btn btn-primary btn-lg">"Analyze Now"</Link>
                    </div>
                </div>
            </div>

            <div class="max-w-6xl mx-auto px-6 pb-24 grid gap-6 md:grid-cols-3">
                <FeatureCard
                    title="Deepfake Forensics"
                    desc="Frame-by-frame forensic analysis of video and audio to detect synthetic manipulation."
                >
                    <ScanFace attr:class="h-8 w-8" />
                </FeatureCard>
                <FeatureCard
                    title="Psychological Ops"
                    desc="Detects emotional triggers (fear, anger, urgency) designed to manipulate public sentiment."
                >
                    <ShieldAlert attr:class="h-8 w-8" />
                </FeatureCard>
                <FeatureCard
                    title="Source Cross-Reference"
                    desc="Claims are checked against trusted outlets and rated by source reliability."
                >
                    <Search attr:class="h-8 w-8" />
                </FeatureCard>
            </div>

            <footer class="footer footer-center p-6 text-base-content/50">
                <p>"© TruthLens AI. All rights reserved."</p>
            </footer>
        </div>
    }
}
