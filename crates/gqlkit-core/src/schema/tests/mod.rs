mod definition_document_tests;
mod null_propagation_tests;
mod sdl_printer_tests;
