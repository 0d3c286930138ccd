use std::sync::Mutex;

use actix_web::middleware::Logger;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use wordchain_core::io::{list_files, read_file};
use wordchain_core::model::frequency_model::FrequencyModel;
use wordchain_core::model::generator::Generator;
use wordchain_core::tokenizer::tokens;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	length: Option<usize>,
	seed: Option<u64> // fixed seed for reproducible output
}

/// Struct representing query parameters for the `/v1/load_corpora` endpoint
#[derive(Deserialize)]
struct LoadQuery {
	names: Option<String>,
	depth: Option<usize>
}

struct SharedData {
	model: Option<FrequencyModel>,
	corpus_names: Vec<String>
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a word sequence from the loaded model based on query
/// parameters. Returns the space-joined text as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let length = query.length.unwrap_or(50);

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let model = match &shared_data.model {
		Some(model) => model,
		None => return HttpResponse::Conflict().body("No corpus loaded"),
	};

	let mut generator = match query.seed {
		Some(seed) => Generator::with_seed(model, seed),
		None => Generator::new(model),
	};

	match generator.generate(length) {
		Ok(words) => HttpResponse::Ok().body(words.join(" ")),
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files("./data", "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora")
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.corpus_names.join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora`
///
/// Trains a fresh model over the named corpus files at the requested
/// depth and swaps it in, replacing any previously loaded model.
#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<LoadQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	let mut model = match FrequencyModel::new(query.depth.unwrap_or(3)) {
		Ok(m) => m,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut loaded = Vec::new();
	for name in corpus_names {
		let corpus_path = format!("./data/{}.txt", name);
		let text = match read_file(&corpus_path) {
			Ok(t) => t,
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read corpus: {e}"))
		};
		// Each corpus restarts at the sentinel; streams are not spliced
		model.train(tokens(&text));
		loaded.push(name.to_owned());
	}

	shared_data.model = Some(model);
	shared_data.corpus_names = loaded;

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Wraps an initially empty model slot in a `Mutex` and starts an
/// Actix-web HTTP server; corpora are trained on demand through the API.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Currently, the corpus directory is hardcoded and should be made configurable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	let shared_data = SharedData {
		model: None,
		corpus_names: Vec::new()
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
